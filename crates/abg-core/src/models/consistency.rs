use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Henderson–Hasselbalch cross-check of the three gas values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsistencyCheck {
    /// `None` when pCO2 or HCO3 is not positive.
    pub calculated_ph: Option<f64>,
    /// `measured - calculated`, when a calculated pH exists.
    pub difference: Option<f64>,
    pub is_consistent: bool,
}
