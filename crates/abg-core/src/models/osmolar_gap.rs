use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OsmolarGapResult {
    pub calculated_osmolality: f64,
    pub measured_osmolality: f64,
    /// `measured_osmolality - calculated_osmolality`.
    pub gap: f64,
    pub is_elevated: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explanation: Vec<String>,
}
