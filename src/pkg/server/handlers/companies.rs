use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    pkg::{
        internal::{
            adaptors::companies::{
                mutators::CompanyMutator,
                selectors::CompanySelector,
                spec::{CompanyEntry, NewCompany},
            },
            parser,
            payload::CandidatePayload,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::{Error, Result},
};

/// Parses the model response and stores every company it lists.
///
/// Conversion of the whole batch happens before the transaction opens, so
/// a bad record means nothing is written. A failed insert drops the
/// transaction uncommitted.
pub async fn ingest(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CandidatePayload>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(payload) = payload.map_err(|e| Error::Body(e.body_text()))?;
    let fields = parser::parse(payload.text()?)?;
    tracing::debug!(records = fields.len(), "parsed model response");

    let companies = fields
        .into_iter()
        .map(|f| NewCompany::from_fields(f, &state.profiles))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut tx = state.db_pool.begin_txn().await?;
    let created = CompanyMutator::new(&mut tx).bulk_create(companies).await?;
    tx.commit().await?;
    tracing::info!(created = created.len(), "companies added");

    Ok(Json(json!({ "message": "Companies parsed and added successfully" })))
}

pub async fn closest(State(state): State<AppState>) -> Result<Json<Vec<CompanyEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let company = CompanySelector::new(&mut tx)
        .closest_deadline()
        .await?
        .ok_or(Error::NotFound)?;
    tx.commit().await?;
    Ok(Json(vec![company]))
}
