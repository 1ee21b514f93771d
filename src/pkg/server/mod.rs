pub mod handlers;
pub mod router;
pub mod state;

use crate::{conf::Settings, prelude::Result};
use router::build_routes;
use state::AppState;

pub async fn listen(settings: &Settings) -> Result<()> {
    let state = AppState::new(settings)?;
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.listen_port)).await?;
    tracing::info!(
        "Listening at port {} (database {} on {})",
        settings.listen_port,
        settings.database_name,
        settings.db_host
    );
    tokio::select! {
        r = axum::serve(listener, build_routes(state)) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
