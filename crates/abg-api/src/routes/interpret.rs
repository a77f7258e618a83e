use axum::Json;
use axum::extract::rejection::JsonRejection;

use abg_core::models::input::BloodGasInput;
use abg_core::models::interpretation::BloodGasInterpretation;
use abg_engine::try_interpret;
use abg_engine::validation::validate_input;

use crate::error::ApiError;

/// Interpret a full blood gas panel.
///
/// Out-of-range values are rejected before the engine runs; a panel without
/// pH, pCO2 or HCO3 is a bad request.
pub async fn interpret_panel(
    payload: Result<Json<BloodGasInput>, JsonRejection>,
) -> Result<Json<BloodGasInterpretation>, ApiError> {
    let Json(input) = payload?;

    let errors = validate_input(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let interpretation = try_interpret(&input)?;
    Ok(Json(interpretation))
}
