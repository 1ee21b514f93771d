use campus_notice::{conf::Settings, pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod migrate;

#[derive(Parser)]
#[command(about = "campus notice ingestion service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the HTTP API. Run `migrate` first: the companies table is not
    /// created here, and every request fails with a 400 until it exists.
    Listen,
    /// Apply pending database migrations
    Migrate,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    let settings = Settings::new()?;
    match args.command {
        Some(SubCommandType::Listen) => {
            listen(&settings).await?;
        }
        Some(SubCommandType::Migrate) => {
            migrate::apply(&settings).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
