use abg_core::models::osmolar_gap::OsmolarGapResult;

use crate::reference::OSMOLAR_GAP_THRESHOLD;

/// Osmolar gap from a measured osmolality and the `2Na + glucose + urea`
/// estimate. Every concentration is in mmol/L, so ethanol is added as is.
pub fn calculate_osmolar_gap(
    measured_osmolality: f64,
    na: f64,
    glucose: f64,
    urea: f64,
    ethanol: Option<f64>,
) -> OsmolarGapResult {
    let base = 2.0 * na + glucose + urea;
    let mut explanation = vec![format!(
        "Calculated osmolality = 2 x Na + glucose + urea = 2 x {na:.1} + {glucose:.1} + {urea:.1} = {base:.1}"
    )];

    let calculated_osmolality = match ethanol {
        Some(ethanol) if ethanol > 0.0 => {
            let total = base + ethanol;
            explanation.push(format!("Including ethanol: {base:.1} + {ethanol:.1} = {total:.1}"));
            total
        }
        _ => base,
    };

    let gap = measured_osmolality - calculated_osmolality;
    explanation.push(format!(
        "Osmolar gap = measured - calculated = {measured_osmolality:.1} - {calculated_osmolality:.1} = {gap:.1}"
    ));

    OsmolarGapResult {
        calculated_osmolality,
        measured_osmolality,
        gap,
        is_elevated: gap > OSMOLAR_GAP_THRESHOLD,
        explanation,
    }
}
