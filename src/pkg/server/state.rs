use std::{future::Future, sync::Arc, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool, Postgres, Transaction};

use crate::{
    conf::Settings,
    prelude::{Error, Result},
};

pub fn db_pool(settings: &Settings) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .acquire_timeout(Duration::from_secs(settings.database_acquire_timeout_secs))
        .connect_lazy(&settings.database_url())?;
    Ok(pool)
}

/// Scoped unit of work: commits explicitly, rolls back when dropped.
pub trait GetTxn {
    fn begin_txn(&self) -> impl Future<Output = Result<Transaction<'static, Postgres>>> + Send;
}

impl GetTxn for PgPool {
    fn begin_txn(&self) -> impl Future<Output = Result<Transaction<'static, Postgres>>> + Send {
        async move { self.begin().await.map_err(Error::from) }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub profiles: Arc<str>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<AppState> {
        Ok(AppState::with_pool(db_pool(settings)?, &settings.default_profiles))
    }

    pub fn with_pool(pool: PgPool, profiles: &str) -> AppState {
        AppState {
            db_pool: Arc::new(pool),
            profiles: Arc::from(profiles),
        }
    }
}
