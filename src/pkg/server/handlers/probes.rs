use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{
    pkg::{
        internal::adaptors::companies::selectors::CompanySelector,
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let companies = CompanySelector::new(&mut tx).count().await?;
    tracing::debug!(companies, "service is healthy");
    Ok(Json(json!({ "status": "ok", "companies": companies })))
}
