//! Plausibility checks applied at the boundary before interpretation.

use abg_core::models::input::BloodGasInput;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::reference::{ReferenceRange, plausible_limit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: f64,
    pub expected_range: Option<ReferenceRange>,
    pub message: String,
}

/// Check a single named value against its plausibility limit.
///
/// Non-finite values always fail. Fields without a limit only need to be finite.
pub fn validate_field(field: &str, value: f64) -> Result<(), ValidationError> {
    let limit = plausible_limit(field);

    if !value.is_finite() {
        return Err(ValidationError {
            field: field.to_string(),
            value,
            expected_range: limit,
            message: format!("{field}: value is not a finite number"),
        });
    }

    match limit {
        Some(range) if !range.contains(value) => Err(ValidationError {
            field: field.to_string(),
            value,
            expected_range: Some(range),
            message: format!(
                "{field}: {value} is outside range [{}, {}]",
                range.min, range.max
            ),
        }),
        _ => Ok(()),
    }
}

/// Validate every present numeric field of a panel.
pub fn validate_input(input: &BloodGasInput) -> Vec<ValidationError> {
    let fields = [
        ("ph", input.ph),
        ("pco2", input.pco2),
        ("hco3", input.hco3),
        ("na", input.na),
        ("cl", input.cl),
        ("albumin", input.albumin),
        ("measured_osmolality", input.measured_osmolality),
        ("glucose", input.glucose),
        ("potassium", input.potassium),
        ("urea", input.urea),
        ("ethanol", input.ethanol),
    ];

    fields
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .filter_map(|(name, value)| validate_field(name, value).err())
        .collect()
}
