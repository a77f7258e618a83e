//! Static reference data: normal ranges, physiological constants and the
//! plausibility limits used by the boundary validator.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn below(&self, value: f64) -> bool {
        value < self.min
    }

    pub fn above(&self, value: f64) -> bool {
        value > self.max
    }

    pub const fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

pub const PH: ReferenceRange = ReferenceRange::new(7.35, 7.45);
pub const PCO2: ReferenceRange = ReferenceRange::new(35.0, 45.0);
pub const HCO3: ReferenceRange = ReferenceRange::new(22.0, 26.0);
pub const ANION_GAP: ReferenceRange = ReferenceRange::new(3.0, 16.0);
pub const SODIUM: ReferenceRange = ReferenceRange::new(135.0, 145.0);
pub const CHLORIDE: ReferenceRange = ReferenceRange::new(98.0, 106.0);
pub const POTASSIUM: ReferenceRange = ReferenceRange::new(3.5, 5.0);
pub const ALBUMIN: ReferenceRange = ReferenceRange::new(3.5, 5.0);

/// pH separating acidaemia-leaning from alkalaemia-leaning panels.
pub const PH_NEUTRAL: f64 = 7.40;
pub const PCO2_MIDPOINT: f64 = PCO2.midpoint();
pub const HCO3_MIDPOINT: f64 = HCO3.midpoint();

/// Anion gap baseline for the delta ratio.
pub const ANION_GAP_BASELINE: f64 = 12.0;
/// Albumin (g/dL) at or above which no anion gap correction applies.
pub const NORMAL_ALBUMIN: f64 = 4.0;
/// mmol/L of anion gap per g/dL of albumin below normal.
pub const ALBUMIN_CORRECTION_FACTOR: f64 = 2.5;

/// Osmolar gap (mOsm/kg) above which the gap is elevated.
pub const OSMOLAR_GAP_THRESHOLD: f64 = 10.0;

/// Glucose (mmol/L) above which a high gap acidosis suggests hyperglycaemic ketoacidosis.
pub const HYPERGLYCAEMIA_THRESHOLD: f64 = 14.0;

/// Henderson–Hasselbalch constants.
pub const PKA_CARBONIC: f64 = 6.1;
pub const CO2_SOLUBILITY: f64 = 0.03;
pub const PH_CONSISTENCY_TOLERANCE: f64 = 0.05;

/// A normal range with its display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NamedRange {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub range: ReferenceRange,
}

fn named(id: &str, name: &str, unit: &str, range: ReferenceRange) -> NamedRange {
    NamedRange {
        id: id.to_string(),
        name: name.to_string(),
        unit: unit.to_string(),
        range,
    }
}

/// Normal ranges shown alongside an interpretation.
pub fn normal_ranges() -> &'static [NamedRange] {
    static RANGES: LazyLock<Vec<NamedRange>> = LazyLock::new(|| {
        vec![
            named("ph", "pH", "", PH),
            named("pco2", "pCO2", "mmHg", PCO2),
            named("hco3", "HCO3", "mmol/L", HCO3),
            named("anion_gap", "Anion gap", "mmol/L", ANION_GAP),
            named(
                "osmolar_gap",
                "Osmolar gap",
                "mOsm/kg",
                ReferenceRange::new(-OSMOLAR_GAP_THRESHOLD, OSMOLAR_GAP_THRESHOLD),
            ),
            named("na", "Sodium", "mmol/L", SODIUM),
            named("cl", "Chloride", "mmol/L", CHLORIDE),
            named("potassium", "Potassium", "mmol/L", POTASSIUM),
            named("albumin", "Albumin", "g/dL", ALBUMIN),
        ]
    });
    &RANGES
}

/// Widest values the boundary accepts for each input field.
pub fn plausible_limit(field: &str) -> Option<ReferenceRange> {
    let range = match field {
        "ph" => ReferenceRange::new(6.8, 7.8),
        "pco2" => ReferenceRange::new(10.0, 100.0),
        "hco3" => ReferenceRange::new(5.0, 45.0),
        "na" => ReferenceRange::new(100.0, 180.0),
        "cl" => ReferenceRange::new(70.0, 130.0),
        "albumin" => ReferenceRange::new(1.0, 6.0),
        "potassium" => ReferenceRange::new(1.5, 9.0),
        "glucose" => ReferenceRange::new(0.0, 100.0),
        "urea" => ReferenceRange::new(0.0, 100.0),
        "measured_osmolality" => ReferenceRange::new(200.0, 500.0),
        "ethanol" => ReferenceRange::new(0.0, 200.0),
        "anion_gap" => ReferenceRange::new(-20.0, 80.0),
        _ => return None,
    };
    Some(range)
}
