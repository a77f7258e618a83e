use abg_core::models::compensation::{
    Chronicity, CompensationResult, CompensationRule, CompensationStatus, ExpectedRange,
};
use abg_core::models::disorder::Disorder;

use super::CompensationAnalyzer;
use crate::reference::{HCO3_MIDPOINT, PCO2_MIDPOINT};

/// Tolerance (mmol/L) around each expected HCO3 change.
const TOLERANCE: f64 = 2.0;

/// Respiratory acidosis: HCO3 rises 1 (acute) or 4 (chronic) per 10 mmHg.
pub struct RespiratoryAcidosisRule;

/// Respiratory alkalosis: HCO3 falls 2 (acute) or 5 (chronic) per 10 mmHg.
pub struct RespiratoryAlkalosisRule;

impl CompensationAnalyzer for RespiratoryAcidosisRule {
    fn rule(&self) -> CompensationRule {
        CompensationRule::RespiratoryAcidosis
    }

    fn disorder(&self) -> Disorder {
        Disorder::RespiratoryAcidosis
    }

    fn description(&self) -> &str {
        "HCO3 rises 1 mmol/L (acute) or 4 mmol/L (chronic) per 10 mmHg rise in pCO2 (± 2)"
    }

    fn analyze(&self, pco2: f64, hco3: f64) -> CompensationResult {
        assess(self, pco2, hco3, 1.0, 4.0)
    }

    fn secondary_disorder(&self, status: CompensationStatus) -> Option<&'static str> {
        match status {
            CompensationStatus::Excessive => Some("concurrent metabolic alkalosis"),
            CompensationStatus::Inadequate => Some("concurrent metabolic acidosis"),
            CompensationStatus::Appropriate | CompensationStatus::Mixed => None,
        }
    }
}

impl CompensationAnalyzer for RespiratoryAlkalosisRule {
    fn rule(&self) -> CompensationRule {
        CompensationRule::RespiratoryAlkalosis
    }

    fn disorder(&self) -> Disorder {
        Disorder::RespiratoryAlkalosis
    }

    fn description(&self) -> &str {
        "HCO3 falls 2 mmol/L (acute) or 5 mmol/L (chronic) per 10 mmHg fall in pCO2 (± 2)"
    }

    fn analyze(&self, pco2: f64, hco3: f64) -> CompensationResult {
        assess(self, pco2, hco3, -2.0, -5.0)
    }

    fn secondary_disorder(&self, status: CompensationStatus) -> Option<&'static str> {
        match status {
            CompensationStatus::Excessive => Some("concurrent metabolic acidosis"),
            CompensationStatus::Inadequate => Some("concurrent metabolic alkalosis"),
            CompensationStatus::Appropriate | CompensationStatus::Mixed => None,
        }
    }
}

/// Shared acute/chronic classification. Rates are signed HCO3 changes per
/// 10 mmHg of pCO2 deviation; comparisons run along the direction of
/// compensation so one set of rules serves both disorders.
fn assess(
    analyzer: &dyn CompensationAnalyzer,
    pco2: f64,
    hco3: f64,
    acute_rate: f64,
    chronic_rate: f64,
) -> CompensationResult {
    let steps = (pco2 - PCO2_MIDPOINT).abs() / 10.0;
    let acute_expected = steps * acute_rate;
    let chronic_expected = steps * chronic_rate;
    let actual = hco3 - HCO3_MIDPOINT;

    let direction = chronic_rate.signum();
    let along = actual * direction;
    let acute_along = acute_expected * direction;
    let chronic_along = chronic_expected * direction;

    let acute_distance = (along - acute_along).abs();
    let chronic_distance = (along - chronic_along).abs();

    let (status, chronicity, expected) = if along > chronic_along + TOLERANCE {
        (CompensationStatus::Excessive, Chronicity::Unknown, chronic_expected)
    } else if along < acute_along - TOLERANCE {
        (CompensationStatus::Inadequate, Chronicity::Acute, acute_expected)
    } else if acute_distance <= TOLERANCE && acute_distance <= chronic_distance {
        (CompensationStatus::Appropriate, Chronicity::Acute, acute_expected)
    } else if chronic_distance <= TOLERANCE {
        (CompensationStatus::Appropriate, Chronicity::Chronic, chronic_expected)
    } else {
        // Between the acute and chronic windows: acute-on-chronic.
        (
            CompensationStatus::Appropriate,
            Chronicity::Unknown,
            (acute_expected + chronic_expected) / 2.0,
        )
    };

    let expected_range = ExpectedRange {
        low: acute_expected.min(chronic_expected) - TOLERANCE,
        high: acute_expected.max(chronic_expected) + TOLERANCE,
    };

    CompensationResult {
        rule: analyzer.rule(),
        expected,
        expected_range,
        actual,
        status,
        chronicity: Some(chronicity),
        description: analyzer.description().to_string(),
        explanation: vec![
            format!("Expected HCO3 change: acute {acute_expected:+.1}, chronic {chronic_expected:+.1} mmol/L"),
            format!("Measured HCO3 change: {hco3:.1} - 24 = {actual:+.1} mmol/L"),
        ],
    }
}
