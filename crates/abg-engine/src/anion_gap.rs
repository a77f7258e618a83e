use abg_core::models::anion_gap::{AnionGapResult, AnionGapStatus};

use crate::reference::{ALBUMIN_CORRECTION_FACTOR, ANION_GAP, NORMAL_ALBUMIN};

/// Anion gap `Na - (Cl + HCO3)`, corrected for albumin below 4 g/dL.
pub fn calculate_anion_gap(na: f64, cl: f64, hco3: f64, albumin: Option<f64>) -> AnionGapResult {
    let raw_value = na - (cl + hco3);
    let mut explanation = vec![format!(
        "AG = Na - (Cl + HCO3) = {na:.1} - ({cl:.1} + {hco3:.1}) = {raw_value:.1}"
    )];

    let corrected_value = match albumin {
        Some(albumin) if albumin < NORMAL_ALBUMIN => {
            let correction = ALBUMIN_CORRECTION_FACTOR * (NORMAL_ALBUMIN - albumin);
            let corrected = raw_value + correction;
            explanation.push(format!(
                "Corrected AG = AG + 2.5 x (4 - albumin) = {raw_value:.1} + 2.5 x (4 - {albumin:.1}) = {corrected:.1}"
            ));
            corrected
        }
        _ => raw_value,
    };

    AnionGapResult {
        raw_value,
        corrected_value,
        status: anion_gap_status(corrected_value),
        explanation,
    }
}

pub fn anion_gap_status(corrected: f64) -> AnionGapStatus {
    if ANION_GAP.above(corrected) {
        AnionGapStatus::High
    } else if ANION_GAP.below(corrected) {
        AnionGapStatus::LowNegative
    } else {
        AnionGapStatus::Normal
    }
}
