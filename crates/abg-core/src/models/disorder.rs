use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Direction of the blood pH relative to its normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PhStatus {
    Acidaemia,
    Normal,
    Alkalaemia,
}

impl PhStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PhStatus::Acidaemia => "acidaemia",
            PhStatus::Normal => "normal",
            PhStatus::Alkalaemia => "alkalaemia",
        }
    }
}

impl fmt::Display for PhStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The primary acid-base disorder of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Disorder {
    RespiratoryAcidosis,
    MetabolicAcidosis,
    RespiratoryAlkalosis,
    MetabolicAlkalosis,
    Normal,
}

impl Disorder {
    pub const ALL: [Disorder; 5] = [
        Disorder::RespiratoryAcidosis,
        Disorder::MetabolicAcidosis,
        Disorder::RespiratoryAlkalosis,
        Disorder::MetabolicAlkalosis,
        Disorder::Normal,
    ];

    /// Snake-case identifier used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Disorder::RespiratoryAcidosis => "respiratory_acidosis",
            Disorder::MetabolicAcidosis => "metabolic_acidosis",
            Disorder::RespiratoryAlkalosis => "respiratory_alkalosis",
            Disorder::MetabolicAlkalosis => "metabolic_alkalosis",
            Disorder::Normal => "normal",
        }
    }

    /// Human-readable name, sentence case.
    pub fn label(self) -> &'static str {
        match self {
            Disorder::RespiratoryAcidosis => "Respiratory acidosis",
            Disorder::MetabolicAcidosis => "Metabolic acidosis",
            Disorder::RespiratoryAlkalosis => "Respiratory alkalosis",
            Disorder::MetabolicAlkalosis => "Metabolic alkalosis",
            Disorder::Normal => "No acid-base disturbance",
        }
    }

    pub fn is_respiratory(self) -> bool {
        matches!(
            self,
            Disorder::RespiratoryAcidosis | Disorder::RespiratoryAlkalosis
        )
    }
}

impl fmt::Display for Disorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disorder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disorder::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CoreError::UnknownDisorder(s.to_string()))
    }
}
