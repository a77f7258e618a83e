//! Differential causes and mnemonics per disorder.

use abg_core::models::anion_gap::AnionGapStatus;
use abg_core::models::compensation::Chronicity;
use abg_core::models::disorder::Disorder;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Candidate causes for one disorder, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CauseList {
    pub causes: Vec<String>,
    pub mnemonic: Option<String>,
}

struct CauseTable {
    causes: &'static [&'static str],
    mnemonic: Option<&'static str>,
}

// MUDPILES
const HIGH_GAP_ACIDOSIS: CauseTable = CauseTable {
    causes: &[
        "Methanol",
        "Uraemia",
        "Diabetic ketoacidosis",
        "Propylene glycol",
        "Isoniazid / iron",
        "Lactic acidosis",
        "Ethylene glycol",
        "Salicylates",
    ],
    mnemonic: Some("MUDPILES"),
};

// HARDUPS
const NORMAL_GAP_ACIDOSIS: CauseTable = CauseTable {
    causes: &[
        "Hyperalimentation",
        "Acetazolamide",
        "Renal tubular acidosis",
        "Diarrhoea",
        "Ureteroenteric fistula",
        "Pancreaticoduodenal fistula",
        "Saline infusion",
    ],
    mnemonic: Some("HARDUPS"),
};

const LOW_GAP: CauseTable = CauseTable {
    causes: &[
        "Hypoalbuminaemia",
        "Paraproteinaemia (multiple myeloma)",
        "Lithium toxicity",
        "Bromide or iodide intoxication",
        "Severe hypercalcaemia or hypermagnesaemia",
        "Laboratory error",
    ],
    mnemonic: None,
};

// CLEVER PD
const METABOLIC_ALKALOSIS: CauseTable = CauseTable {
    causes: &[
        "Contraction (volume depletion)",
        "Liquorice",
        "Endocrine (Conn's, Cushing's, Bartter's)",
        "Vomiting or nasogastric suction",
        "Excess alkali",
        "Refeeding",
        "Post-hypercapnia",
        "Diuretics",
    ],
    mnemonic: Some("CLEVER PD"),
};

const ACUTE_RESPIRATORY_ACIDOSIS: CauseTable = CauseTable {
    causes: &[
        "CNS depression (opioids, sedatives, head injury)",
        "Airway obstruction",
        "Acute severe asthma or COPD exacerbation",
        "Neuromuscular weakness (Guillain-Barré, myasthenia)",
        "Chest wall trauma or flail chest",
        "Pneumothorax",
    ],
    mnemonic: None,
};

const CHRONIC_RESPIRATORY_ACIDOSIS: CauseTable = CauseTable {
    causes: &[
        "COPD",
        "Obesity hypoventilation syndrome",
        "Chronic neuromuscular disease (MND, muscular dystrophy)",
        "Kyphoscoliosis",
        "Central hypoventilation",
    ],
    mnemonic: None,
};

// CHAMPS
const ACUTE_RESPIRATORY_ALKALOSIS: CauseTable = CauseTable {
    causes: &[
        "CNS disease (stroke, haemorrhage, trauma)",
        "Hypoxia (pulmonary embolism, pneumonia, altitude)",
        "Anxiety or pain",
        "Mechanical over-ventilation",
        "Progesterone (pregnancy)",
        "Salicylates or sepsis",
    ],
    mnemonic: Some("CHAMPS"),
};

const CHRONIC_RESPIRATORY_ALKALOSIS: CauseTable = CauseTable {
    causes: &[
        "Pregnancy",
        "High altitude residence",
        "Chronic liver disease",
        "Interstitial lung disease",
    ],
    mnemonic: None,
};

impl CauseTable {
    fn to_list(&self) -> CauseList {
        CauseList {
            causes: self.causes.iter().map(|c| c.to_string()).collect(),
            mnemonic: self.mnemonic.map(str::to_string),
        }
    }
}

/// Look up the causes for a disorder.
///
/// Metabolic acidosis is keyed by anion gap status and respiratory disorders
/// by chronicity; without the key every applicable table is returned, with no
/// mnemonic. `Normal` has no causes.
pub fn lookup(
    disorder: Disorder,
    anion_gap_status: Option<AnionGapStatus>,
    chronicity: Option<Chronicity>,
) -> CauseList {
    match disorder {
        Disorder::MetabolicAcidosis => match anion_gap_status {
            Some(AnionGapStatus::High) => HIGH_GAP_ACIDOSIS.to_list(),
            Some(AnionGapStatus::Normal) => NORMAL_GAP_ACIDOSIS.to_list(),
            Some(AnionGapStatus::LowNegative) => LOW_GAP.to_list(),
            None => combined(&[&HIGH_GAP_ACIDOSIS, &NORMAL_GAP_ACIDOSIS]),
        },
        Disorder::MetabolicAlkalosis => METABOLIC_ALKALOSIS.to_list(),
        Disorder::RespiratoryAcidosis => by_chronicity(
            chronicity,
            &ACUTE_RESPIRATORY_ACIDOSIS,
            &CHRONIC_RESPIRATORY_ACIDOSIS,
        ),
        Disorder::RespiratoryAlkalosis => by_chronicity(
            chronicity,
            &ACUTE_RESPIRATORY_ALKALOSIS,
            &CHRONIC_RESPIRATORY_ALKALOSIS,
        ),
        Disorder::Normal => CauseList::default(),
    }
}

/// Look up causes by wire identifier. Unknown identifiers yield an empty list.
pub fn lookup_by_id(
    disorder_id: &str,
    anion_gap_status: Option<AnionGapStatus>,
    chronicity: Option<Chronicity>,
) -> CauseList {
    match disorder_id.parse::<Disorder>() {
        Ok(disorder) => lookup(disorder, anion_gap_status, chronicity),
        Err(_) => CauseList::default(),
    }
}

fn by_chronicity(
    chronicity: Option<Chronicity>,
    acute: &CauseTable,
    chronic: &CauseTable,
) -> CauseList {
    match chronicity {
        Some(Chronicity::Acute) => acute.to_list(),
        Some(Chronicity::Chronic) => chronic.to_list(),
        Some(Chronicity::Unknown) | None => combined(&[acute, chronic]),
    }
}

fn combined(tables: &[&CauseTable]) -> CauseList {
    CauseList {
        causes: tables
            .iter()
            .flat_map(|t| t.causes.iter().map(|c| c.to_string()))
            .collect(),
        mnemonic: None,
    }
}
