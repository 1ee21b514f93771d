use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub listen_port: String,
    pub db_username: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub database_name: String,
    /// Full connection string; takes precedence over the db_* parts.
    pub database_url: Option<String>,
    pub database_pool_max_connections: u32,
    /// Seconds a request waits for a pooled connection before failing.
    pub database_acquire_timeout_secs: u64,
    /// Literal stored in `profiles` for every ingested company.
    pub default_profiles: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(Environment::default())
    }

    pub fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("listen_port", "8000")?
            .set_default("db_port", 5432)?
            .set_default("database_name", "CampusNotice")?
            .set_default("database_pool_max_connections", 5)?
            .set_default("database_acquire_timeout_secs", 5)?
            .set_default("default_profiles", "FTE Only")?
            .add_source(env)
            .build()?;
        conf.try_deserialize()
    }

    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "postgresql://{}:{}@{}:{}/{}",
                self.db_username, self.db_password, self.db_host, self.db_port, self.database_name
            ),
        }
    }
}
