use abg_core::models::disorder::PhStatus;

use crate::reference::PH;

/// Classify a pH against the 7.35–7.45 normal range.
pub fn classify_ph(ph: f64) -> PhStatus {
    if PH.below(ph) {
        PhStatus::Acidaemia
    } else if PH.above(ph) {
        PhStatus::Alkalaemia
    } else {
        PhStatus::Normal
    }
}
