use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::anion_gap::AnionGapResult;
use super::compensation::CompensationResult;
use super::consistency::ConsistencyCheck;
use super::delta_ratio::DeltaRatioResult;
use super::disorder::{Disorder, PhStatus};
use super::input::BloodGasInput;
use super::osmolar_gap::OsmolarGapResult;

/// The full interpretation of one panel. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodGasInterpretation {
    pub input: BloodGasInput,
    pub ph_status: PhStatus,
    pub primary_disorder: Disorder,
    pub anion_gap: Option<AnionGapResult>,
    pub osmolar_gap: Option<OsmolarGapResult>,
    pub compensation: Option<CompensationResult>,
    pub delta_ratio: Option<DeltaRatioResult>,
    pub consistency: ConsistencyCheck,
    pub secondary_disorders: Vec<String>,
    pub clinical_clues: Vec<String>,
    pub causes: Vec<String>,
    pub mnemonic: Option<String>,
    pub summary: String,
}
