use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DeltaRatioStatus {
    /// Below 0.4.
    PureNagmaHagma,
    /// 0.4 up to (not including) 0.8.
    MixedNagmaHagma,
    /// 0.8 to 2.0 inclusive.
    Hagma,
    /// Above 2.0.
    HagmaMetabolicAlkalosis,
}

impl DeltaRatioStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DeltaRatioStatus::PureNagmaHagma => "pure_nagma_hagma",
            DeltaRatioStatus::MixedNagmaHagma => "mixed_nagma_hagma",
            DeltaRatioStatus::Hagma => "hagma",
            DeltaRatioStatus::HagmaMetabolicAlkalosis => "hagma_metabolic_alkalosis",
        }
    }
}

impl fmt::Display for DeltaRatioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delta ratio: (AG - 12) / (24 - HCO3).
///
/// `ratio` is `None` when the bicarbonate deficit is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeltaRatioResult {
    pub ratio: Option<f64>,
    pub delta_anion_gap: f64,
    pub delta_hco3: f64,
    pub status: DeltaRatioStatus,
    pub interpretation: String,
}
