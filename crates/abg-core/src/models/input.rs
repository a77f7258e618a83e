use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A blood gas panel as submitted by the form layer.
///
/// Every field is independently optional. Concentrations are in mmol/L
/// (glucose, urea, ethanol included), pCO2 in mmHg, albumin in g/dL and
/// measured osmolality in mOsm/kg. Unit conversion happens before the panel
/// reaches the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodGasInput {
    pub ph: Option<f64>,
    pub pco2: Option<f64>,
    pub hco3: Option<f64>,
    pub na: Option<f64>,
    pub cl: Option<f64>,
    pub albumin: Option<f64>,
    pub measured_osmolality: Option<f64>,
    pub glucose: Option<f64>,
    pub potassium: Option<f64>,
    pub urea: Option<f64>,
    pub ethanol: Option<f64>,
    pub ketones_present: Option<bool>,
    pub vision_changes: Option<bool>,
    pub calcium_oxalate_crystals: Option<bool>,
}

impl BloodGasInput {
    /// Shorthand for a panel carrying only the three required gas values.
    pub fn gas(ph: f64, pco2: f64, hco3: f64) -> Self {
        Self {
            ph: Some(ph),
            pco2: Some(pco2),
            hco3: Some(hco3),
            ..Self::default()
        }
    }

    pub fn with_electrolytes(mut self, na: f64, cl: f64) -> Self {
        self.na = Some(na);
        self.cl = Some(cl);
        self
    }

    pub fn with_albumin(mut self, albumin: f64) -> Self {
        self.albumin = Some(albumin);
        self
    }

    /// Attach the fields needed for an osmolar gap.
    pub fn with_osmolality(mut self, measured: f64, glucose: f64, urea: f64) -> Self {
        self.measured_osmolality = Some(measured);
        self.glucose = Some(glucose);
        self.urea = Some(urea);
        self
    }
}
