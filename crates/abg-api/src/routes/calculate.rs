//! Standalone single-metric calculators.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use abg_core::models::anion_gap::AnionGapResult;
use abg_core::models::compensation::CompensationResult;
use abg_core::models::delta_ratio::DeltaRatioResult;
use abg_core::models::osmolar_gap::OsmolarGapResult;
use abg_engine::anion_gap::calculate_anion_gap;
use abg_engine::compensation::winters_formula;
use abg_engine::delta_ratio::calculate_delta_ratio;
use abg_engine::osmolar_gap::calculate_osmolar_gap;
use abg_engine::validation::validate_field;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct AnionGapRequest {
    pub na: f64,
    pub cl: f64,
    pub hco3: f64,
    pub albumin: Option<f64>,
}

#[derive(Deserialize)]
pub struct OsmolarGapRequest {
    pub measured_osmolality: f64,
    pub na: f64,
    pub glucose: f64,
    pub urea: f64,
    pub ethanol: Option<f64>,
}

#[derive(Deserialize)]
pub struct WintersRequest {
    pub hco3: f64,
    pub pco2: f64,
}

#[derive(Deserialize)]
pub struct DeltaRatioRequest {
    pub anion_gap: f64,
    pub hco3: f64,
}

/// Validate named values, skipping absent optionals.
fn check(fields: &[(&str, Option<f64>)]) -> Result<(), ApiError> {
    let errors: Vec<_> = fields
        .iter()
        .filter_map(|(name, value)| value.and_then(|v| validate_field(name, v).err()))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

pub async fn anion_gap(
    payload: Result<Json<AnionGapRequest>, JsonRejection>,
) -> Result<Json<AnionGapResult>, ApiError> {
    let Json(req) = payload?;
    check(&[
        ("na", Some(req.na)),
        ("cl", Some(req.cl)),
        ("hco3", Some(req.hco3)),
        ("albumin", req.albumin),
    ])?;

    Ok(Json(calculate_anion_gap(req.na, req.cl, req.hco3, req.albumin)))
}

pub async fn osmolar_gap(
    payload: Result<Json<OsmolarGapRequest>, JsonRejection>,
) -> Result<Json<OsmolarGapResult>, ApiError> {
    let Json(req) = payload?;
    check(&[
        ("measured_osmolality", Some(req.measured_osmolality)),
        ("na", Some(req.na)),
        ("glucose", Some(req.glucose)),
        ("urea", Some(req.urea)),
        ("ethanol", req.ethanol),
    ])?;

    Ok(Json(calculate_osmolar_gap(
        req.measured_osmolality,
        req.na,
        req.glucose,
        req.urea,
        req.ethanol,
    )))
}

pub async fn winters(
    payload: Result<Json<WintersRequest>, JsonRejection>,
) -> Result<Json<CompensationResult>, ApiError> {
    let Json(req) = payload?;
    check(&[("hco3", Some(req.hco3)), ("pco2", Some(req.pco2))])?;

    Ok(Json(winters_formula(req.hco3, req.pco2)))
}

pub async fn delta_ratio(
    payload: Result<Json<DeltaRatioRequest>, JsonRejection>,
) -> Result<Json<DeltaRatioResult>, ApiError> {
    let Json(req) = payload?;
    check(&[("anion_gap", Some(req.anion_gap)), ("hco3", Some(req.hco3))])?;

    Ok(Json(calculate_delta_ratio(req.anion_gap, req.hco3)))
}
