use abg_core::models::compensation::{
    CompensationResult, CompensationRule, CompensationStatus, ExpectedRange,
};
use abg_core::models::disorder::Disorder;

use super::CompensationAnalyzer;
use crate::reference::PCO2;

/// Winter's formula: expected pCO2 = 1.5 x HCO3 + 8, ± 2.
pub struct WintersFormula;

impl CompensationAnalyzer for WintersFormula {
    fn rule(&self) -> CompensationRule {
        CompensationRule::WintersFormula
    }

    fn disorder(&self) -> Disorder {
        Disorder::MetabolicAcidosis
    }

    fn description(&self) -> &str {
        "Winter's formula: expected pCO2 = 1.5 x HCO3 + 8 (± 2)"
    }

    fn analyze(&self, pco2: f64, hco3: f64) -> CompensationResult {
        let expected = 1.5 * hco3 + 8.0;
        let expected_range = ExpectedRange::around(expected, 2.0);

        let status = if expected_range.contains(pco2) {
            CompensationStatus::Appropriate
        } else if pco2 < expected_range.low {
            CompensationStatus::Excessive
        } else if pco2 >= PCO2.max {
            CompensationStatus::Mixed
        } else {
            CompensationStatus::Inadequate
        };

        CompensationResult {
            rule: self.rule(),
            expected,
            expected_range,
            actual: pco2,
            status,
            chronicity: None,
            description: self.description().to_string(),
            explanation: vec![
                format!("Expected pCO2 = 1.5 x {hco3:.1} + 8 = {expected:.1}"),
                format!(
                    "Acceptable range {:.1} - {:.1} mmHg, measured {pco2:.1} mmHg",
                    expected_range.low, expected_range.high
                ),
            ],
        }
    }

    fn secondary_disorder(&self, status: CompensationStatus) -> Option<&'static str> {
        match status {
            CompensationStatus::Appropriate => None,
            CompensationStatus::Excessive => Some("concurrent respiratory alkalosis"),
            CompensationStatus::Inadequate => Some("concurrent respiratory acidosis"),
            CompensationStatus::Mixed => Some("combined metabolic and respiratory acidosis"),
        }
    }
}

/// Metabolic alkalosis: expected pCO2 = 0.7 x HCO3 + 20, ± 5.
pub struct MetabolicAlkalosisRule;

impl CompensationAnalyzer for MetabolicAlkalosisRule {
    fn rule(&self) -> CompensationRule {
        CompensationRule::MetabolicAlkalosis
    }

    fn disorder(&self) -> Disorder {
        Disorder::MetabolicAlkalosis
    }

    fn description(&self) -> &str {
        "Expected pCO2 = 0.7 x HCO3 + 20 (± 5)"
    }

    fn analyze(&self, pco2: f64, hco3: f64) -> CompensationResult {
        let expected = 0.7 * hco3 + 20.0;
        let expected_range = ExpectedRange::around(expected, 5.0);

        let status = if expected_range.contains(pco2) {
            CompensationStatus::Appropriate
        } else if pco2 > expected_range.high {
            CompensationStatus::Excessive
        } else if PCO2.below(pco2) {
            CompensationStatus::Mixed
        } else {
            CompensationStatus::Inadequate
        };

        CompensationResult {
            rule: self.rule(),
            expected,
            expected_range,
            actual: pco2,
            status,
            chronicity: None,
            description: self.description().to_string(),
            explanation: vec![
                format!("Expected pCO2 = 0.7 x {hco3:.1} + 20 = {expected:.1}"),
                format!(
                    "Acceptable range {:.1} - {:.1} mmHg, measured {pco2:.1} mmHg",
                    expected_range.low, expected_range.high
                ),
            ],
        }
    }

    fn secondary_disorder(&self, status: CompensationStatus) -> Option<&'static str> {
        match status {
            CompensationStatus::Appropriate => None,
            CompensationStatus::Excessive => Some("concurrent respiratory acidosis"),
            CompensationStatus::Inadequate => Some("concurrent respiratory alkalosis"),
            CompensationStatus::Mixed => Some("combined metabolic and respiratory alkalosis"),
        }
    }
}
