use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Which compensation rule produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompensationRule {
    /// Expected pCO2 for a metabolic acidosis.
    WintersFormula,
    /// Expected pCO2 for a metabolic alkalosis.
    MetabolicAlkalosis,
    /// Expected HCO3 change for a respiratory acidosis.
    RespiratoryAcidosis,
    /// Expected HCO3 change for a respiratory alkalosis.
    RespiratoryAlkalosis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompensationStatus {
    Appropriate,
    Inadequate,
    Excessive,
    /// Compensating parameter has crossed its own normal limit in the
    /// wrong direction: a combined primary disorder.
    Mixed,
}

impl CompensationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CompensationStatus::Appropriate => "appropriate",
            CompensationStatus::Inadequate => "inadequate",
            CompensationStatus::Excessive => "excessive",
            CompensationStatus::Mixed => "mixed",
        }
    }
}

impl fmt::Display for CompensationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Chronicity {
    Acute,
    Chronic,
    Unknown,
}

impl Chronicity {
    pub fn as_str(self) -> &'static str {
        match self {
            Chronicity::Acute => "acute",
            Chronicity::Chronic => "chronic",
            Chronicity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Chronicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chronicity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "acute" => Ok(Chronicity::Acute),
            "chronic" => Ok(Chronicity::Chronic),
            "unknown" => Ok(Chronicity::Unknown),
            other => Err(CoreError::UnknownChronicity(other.to_string())),
        }
    }
}

/// Closed interval of acceptable values for the compensating parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpectedRange {
    pub low: f64,
    pub high: f64,
}

impl ExpectedRange {
    pub fn around(centre: f64, tolerance: f64) -> Self {
        Self {
            low: centre - tolerance,
            high: centre + tolerance,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Outcome of comparing the compensating parameter with its expected value.
///
/// For the metabolic rules `expected` and `actual` are pCO2 in mmHg. For the
/// respiratory rules they are the HCO3 change from 24 mmol/L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompensationResult {
    pub rule: CompensationRule,
    pub expected: f64,
    pub expected_range: ExpectedRange,
    pub actual: f64,
    pub status: CompensationStatus,
    pub chronicity: Option<Chronicity>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explanation: Vec<String>,
}
