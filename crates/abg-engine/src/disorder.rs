//! Primary disorder classification from pH, pCO2 and HCO3.

use abg_core::models::disorder::Disorder;

use crate::reference::{HCO3, PCO2, PH, PH_NEUTRAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaning {
    Acid,
    Alkaline,
}

/// Classify the primary disorder of a panel.
///
/// A panel with all three values inside their normal ranges is `Normal`.
/// Otherwise the pH side of 7.40 decides the direction; at exactly 7.40 the
/// respiratory component breaks the tie, then the metabolic one. When both
/// components point the same way the larger fractional deviation from its
/// midpoint wins; only a strictly larger pCO2 deviation picks the
/// respiratory disorder.
pub fn classify_disorder(ph: f64, pco2: f64, hco3: f64) -> Disorder {
    if PH.contains(ph) && PCO2.contains(pco2) && HCO3.contains(hco3) {
        return Disorder::Normal;
    }

    match leaning(ph, pco2, hco3) {
        Some(Leaning::Acid) => acid_side(pco2, hco3),
        Some(Leaning::Alkaline) => alkaline_side(pco2, hco3),
        // Only reachable for non-finite input.
        None => Disorder::Normal,
    }
}

fn leaning(ph: f64, pco2: f64, hco3: f64) -> Option<Leaning> {
    if ph < PH_NEUTRAL {
        Some(Leaning::Acid)
    } else if ph > PH_NEUTRAL {
        Some(Leaning::Alkaline)
    } else if PCO2.above(pco2) {
        Some(Leaning::Acid)
    } else if PCO2.below(pco2) {
        Some(Leaning::Alkaline)
    } else if HCO3.below(hco3) {
        Some(Leaning::Acid)
    } else if HCO3.above(hco3) {
        Some(Leaning::Alkaline)
    } else {
        None
    }
}

fn acid_side(pco2: f64, hco3: f64) -> Disorder {
    match (PCO2.above(pco2), HCO3.below(hco3)) {
        (true, true) if respiratory_dominates(pco2, hco3) => Disorder::RespiratoryAcidosis,
        (true, true) => Disorder::MetabolicAcidosis,
        (true, false) => Disorder::RespiratoryAcidosis,
        (false, _) => Disorder::MetabolicAcidosis,
    }
}

fn alkaline_side(pco2: f64, hco3: f64) -> Disorder {
    match (PCO2.below(pco2), HCO3.above(hco3)) {
        (true, true) if respiratory_dominates(pco2, hco3) => Disorder::RespiratoryAlkalosis,
        (true, true) => Disorder::MetabolicAlkalosis,
        (true, false) => Disorder::RespiratoryAlkalosis,
        (false, _) => Disorder::MetabolicAlkalosis,
    }
}

fn respiratory_dominates(pco2: f64, hco3: f64) -> bool {
    fractional_deviation(pco2, PCO2.midpoint()) > fractional_deviation(hco3, HCO3.midpoint())
}

fn fractional_deviation(value: f64, midpoint: f64) -> f64 {
    (value - midpoint).abs() / midpoint
}
