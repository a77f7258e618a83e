use abg_core::models::consistency::ConsistencyCheck;

use crate::reference::{CO2_SOLUBILITY, PH_CONSISTENCY_TOLERANCE, PKA_CARBONIC};

/// Henderson–Hasselbalch check: `pH = 6.1 + log10(HCO3 / (0.03 x pCO2))`.
///
/// Disagreement beyond 0.05 flags the panel's data quality; it does not
/// alter the interpretation.
pub fn check(ph: f64, pco2: f64, hco3: f64) -> ConsistencyCheck {
    let calculated_ph = henderson_hasselbalch(pco2, hco3);
    let difference = calculated_ph.map(|calc| ph - calc);
    let is_consistent = difference.is_some_and(|d| d.abs() <= PH_CONSISTENCY_TOLERANCE);

    ConsistencyCheck {
        calculated_ph,
        difference,
        is_consistent,
    }
}

pub fn henderson_hasselbalch(pco2: f64, hco3: f64) -> Option<f64> {
    if pco2 <= 0.0 || hco3 <= 0.0 || !pco2.is_finite() || !hco3.is_finite() {
        return None;
    }
    Some(PKA_CARBONIC + (hco3 / (CO2_SOLUBILITY * pco2)).log10())
}
