use abg_core::models::delta_ratio::{DeltaRatioResult, DeltaRatioStatus};

use crate::reference::{ANION_GAP_BASELINE, HCO3_MIDPOINT};

/// Delta ratio `(AG - 12) / (24 - HCO3)`, normally fed the albumin-corrected gap.
pub fn calculate_delta_ratio(anion_gap: f64, hco3: f64) -> DeltaRatioResult {
    let delta_anion_gap = anion_gap - ANION_GAP_BASELINE;
    let delta_hco3 = HCO3_MIDPOINT - hco3;

    if delta_hco3 == 0.0 {
        return DeltaRatioResult {
            ratio: None,
            delta_anion_gap,
            delta_hco3,
            status: DeltaRatioStatus::Hagma,
            interpretation: "HCO3 is 24 mmol/L so the bicarbonate deficit is zero and the delta \
                             ratio is undefined; treat as high anion gap metabolic acidosis"
                .to_string(),
        };
    }

    let ratio = delta_anion_gap / delta_hco3;
    let status = delta_ratio_status(ratio);

    DeltaRatioResult {
        ratio: Some(ratio),
        delta_anion_gap,
        delta_hco3,
        status,
        interpretation: format!("Delta ratio {ratio:.2}: {}", describe(status)),
    }
}

pub fn delta_ratio_status(ratio: f64) -> DeltaRatioStatus {
    if ratio < 0.4 {
        DeltaRatioStatus::PureNagmaHagma
    } else if ratio < 0.8 {
        DeltaRatioStatus::MixedNagmaHagma
    } else if ratio <= 2.0 {
        DeltaRatioStatus::Hagma
    } else {
        DeltaRatioStatus::HagmaMetabolicAlkalosis
    }
}

fn describe(status: DeltaRatioStatus) -> &'static str {
    match status {
        DeltaRatioStatus::PureNagmaHagma => {
            "bicarbonate fall far exceeds the gap rise; predominantly normal anion gap acidosis"
        }
        DeltaRatioStatus::MixedNagmaHagma => {
            "combined high and normal anion gap metabolic acidosis"
        }
        DeltaRatioStatus::Hagma => "uncomplicated high anion gap metabolic acidosis",
        DeltaRatioStatus::HagmaMetabolicAlkalosis => {
            "gap rise exceeds the bicarbonate fall; high anion gap acidosis with concurrent \
             metabolic alkalosis or pre-existing compensated respiratory acidosis"
        }
    }
}
