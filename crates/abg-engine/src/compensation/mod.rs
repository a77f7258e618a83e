//! Expected-compensation rules for each primary disorder.

pub mod metabolic;
pub mod respiratory;

use abg_core::models::compensation::{CompensationResult, CompensationRule, CompensationStatus};
use abg_core::models::disorder::Disorder;

pub use metabolic::{MetabolicAlkalosisRule, WintersFormula};
pub use respiratory::{RespiratoryAcidosisRule, RespiratoryAlkalosisRule};

/// Trait implemented by each compensation rule set.
pub trait CompensationAnalyzer: Send + Sync {
    /// Which rule this analyzer applies.
    fn rule(&self) -> CompensationRule;

    /// The primary disorder whose compensation this rule judges.
    fn disorder(&self) -> Disorder;

    /// One-line statement of the rule, e.g. "Expected pCO2 = 1.5 x HCO3 + 8 (± 2)".
    fn description(&self) -> &str;

    /// Compare the measured values against the expected compensation.
    fn analyze(&self, pco2: f64, hco3: f64) -> CompensationResult;

    /// Secondary disorder implied by a non-appropriate status, if any.
    fn secondary_disorder(&self, status: CompensationStatus) -> Option<&'static str>;
}

/// Return every registered analyzer.
pub fn all_analyzers() -> Vec<Box<dyn CompensationAnalyzer>> {
    vec![
        Box::new(WintersFormula),
        Box::new(MetabolicAlkalosisRule),
        Box::new(RespiratoryAcidosisRule),
        Box::new(RespiratoryAlkalosisRule),
    ]
}

/// Look up the analyzer for a primary disorder. `Normal` has none.
pub fn analyzer_for(disorder: Disorder) -> Option<Box<dyn CompensationAnalyzer>> {
    all_analyzers()
        .into_iter()
        .find(|a| a.disorder() == disorder)
}

/// Winter's formula for a metabolic acidosis.
pub fn winters_formula(hco3: f64, pco2: f64) -> CompensationResult {
    WintersFormula.analyze(pco2, hco3)
}
