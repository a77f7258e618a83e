use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnionGapStatus {
    Normal,
    High,
    /// Below 3 mmol/L, including negative gaps.
    LowNegative,
}

impl AnionGapStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AnionGapStatus::Normal => "normal",
            AnionGapStatus::High => "high",
            AnionGapStatus::LowNegative => "low_negative",
        }
    }
}

impl fmt::Display for AnionGapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnionGapStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(AnionGapStatus::Normal),
            "high" => Ok(AnionGapStatus::High),
            "low_negative" => Ok(AnionGapStatus::LowNegative),
            other => Err(CoreError::UnknownAnionGapStatus(other.to_string())),
        }
    }
}

/// Anion gap with optional albumin correction.
///
/// `corrected_value` equals `raw_value` unless albumin was supplied below
/// 4 g/dL, in which case it is `raw_value + 2.5 * (4 - albumin)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnionGapResult {
    pub raw_value: f64,
    pub corrected_value: f64,
    pub status: AnionGapStatus,
    /// Human-readable working, for display only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explanation: Vec<String>,
}
