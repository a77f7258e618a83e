use axum::Json;
use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};

use abg_core::models::anion_gap::AnionGapStatus;
use abg_core::models::compensation::Chronicity;
use abg_engine::causes::lookup_by_id;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct CausesQuery {
    pub anion_gap_status: Option<String>,
    pub chronicity: Option<String>,
}

#[derive(Serialize)]
pub struct CausesResponse {
    disorder: String,
    causes: Vec<String>,
    mnemonic: Option<String>,
}

/// Differential causes for a disorder. Unknown disorders return an empty list.
pub async fn list_causes(
    Path(disorder): Path<String>,
    Query(query): Query<CausesQuery>,
) -> Result<Json<CausesResponse>, ApiError> {
    let anion_gap_status = query
        .anion_gap_status
        .as_deref()
        .map(str::parse::<AnionGapStatus>)
        .transpose()?;
    let chronicity = query
        .chronicity
        .as_deref()
        .map(str::parse::<Chronicity>)
        .transpose()?;

    let list = lookup_by_id(&disorder, anion_gap_status, chronicity);

    Ok(Json(CausesResponse {
        disorder,
        causes: list.causes,
        mnemonic: list.mnemonic,
    }))
}
