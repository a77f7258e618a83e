//! Full-panel interpretation: sequences the classifiers and calculators and
//! assembles the result.

use abg_core::models::anion_gap::{AnionGapResult, AnionGapStatus};
use abg_core::models::compensation::{Chronicity, CompensationResult, CompensationStatus};
use abg_core::models::consistency::ConsistencyCheck;
use abg_core::models::delta_ratio::{DeltaRatioResult, DeltaRatioStatus};
use abg_core::models::disorder::{Disorder, PhStatus};
use abg_core::models::input::BloodGasInput;
use abg_core::models::interpretation::BloodGasInterpretation;
use abg_core::models::osmolar_gap::OsmolarGapResult;

use crate::anion_gap::calculate_anion_gap;
use crate::causes;
use crate::compensation::analyzer_for;
use crate::consistency;
use crate::delta_ratio::calculate_delta_ratio;
use crate::disorder::classify_disorder;
use crate::error::EngineError;
use crate::osmolar_gap::calculate_osmolar_gap;
use crate::ph::classify_ph;
use crate::reference::{HCO3, HYPERGLYCAEMIA_THRESHOLD, POTASSIUM};

const CONCURRENT_METABOLIC_ACIDOSIS: &str = "concurrent metabolic acidosis";
const CONCURRENT_METABOLIC_ALKALOSIS: &str = "concurrent metabolic alkalosis";
const CONCURRENT_HAGMA: &str = "concurrent high anion gap metabolic acidosis";
const HIDDEN_HAGMA: &str = "hidden high anion gap metabolic acidosis";

/// Interpret a panel. `None` when pH, pCO2 or HCO3 is missing.
pub fn interpret(input: &BloodGasInput) -> Option<BloodGasInterpretation> {
    match try_interpret(input) {
        Ok(interpretation) => Some(interpretation),
        Err(e) => {
            tracing::debug!(error = %e, "panel not interpreted");
            None
        }
    }
}

/// Interpret a panel, naming the first missing required field on failure.
pub fn try_interpret(input: &BloodGasInput) -> Result<BloodGasInterpretation, EngineError> {
    let ph = input.ph.ok_or(EngineError::MissingField("ph"))?;
    let pco2 = input.pco2.ok_or(EngineError::MissingField("pco2"))?;
    let hco3 = input.hco3.ok_or(EngineError::MissingField("hco3"))?;

    let ph_status = classify_ph(ph);
    let primary_disorder = classify_disorder(ph, pco2, hco3);
    tracing::debug!(%ph_status, %primary_disorder, "classified panel");

    let anion_gap = match (input.na, input.cl) {
        (Some(na), Some(cl)) if needs_anion_gap(primary_disorder, ph_status, hco3) => {
            Some(calculate_anion_gap(na, cl, hco3, input.albumin))
        }
        _ => None,
    };

    let osmolar_gap = match (
        input.measured_osmolality,
        input.na,
        input.glucose,
        input.urea,
    ) {
        (Some(measured), Some(na), Some(glucose), Some(urea)) => Some(calculate_osmolar_gap(
            measured,
            na,
            glucose,
            urea,
            input.ethanol,
        )),
        _ => None,
    };

    let analyzer = analyzer_for(primary_disorder);
    let compensation = analyzer.as_ref().map(|a| a.analyze(pco2, hco3));

    let high_gap = anion_gap
        .as_ref()
        .is_some_and(|ag| ag.status == AnionGapStatus::High);
    let delta_ratio = anion_gap
        .as_ref()
        .filter(|_| high_gap)
        .map(|ag| calculate_delta_ratio(ag.corrected_value, hco3));

    tracing::debug!(
        anion_gap = anion_gap.is_some(),
        osmolar_gap = osmolar_gap.is_some(),
        compensation = compensation.is_some(),
        delta_ratio = delta_ratio.is_some(),
        "sub-calculations resolved"
    );

    let mut secondary_disorders = Vec::new();
    if let (Some(analyzer), Some(result)) = (&analyzer, &compensation)
        && let Some(secondary) = analyzer.secondary_disorder(result.status)
    {
        push_unique(&mut secondary_disorders, secondary);
    }
    if high_gap && primary_disorder != Disorder::MetabolicAcidosis {
        secondary_disorders.retain(|s| *s != CONCURRENT_METABOLIC_ACIDOSIS);
        let hagma = if primary_disorder == Disorder::Normal {
            HIDDEN_HAGMA
        } else {
            CONCURRENT_HAGMA
        };
        push_unique(&mut secondary_disorders, hagma);
    }
    if let Some(secondary) = delta_ratio.as_ref().and_then(delta_ratio_secondary)
        && !(primary_disorder == Disorder::MetabolicAlkalosis
            && secondary == CONCURRENT_METABOLIC_ALKALOSIS)
    {
        push_unique(&mut secondary_disorders, secondary);
    }

    let consistency = consistency::check(ph, pco2, hco3);

    let chronicity = compensation.as_ref().and_then(|c| c.chronicity);
    let (cause_disorder, cause_gap) = if high_gap {
        (
            if primary_disorder == Disorder::Normal {
                Disorder::MetabolicAcidosis
            } else {
                primary_disorder
            },
            Some(AnionGapStatus::High),
        )
    } else {
        (primary_disorder, anion_gap.as_ref().map(|ag| ag.status))
    };
    let mut cause_list = causes::lookup(cause_disorder, cause_gap, chronicity);

    let clues = clinical_clues(
        input,
        primary_disorder,
        anion_gap.as_ref(),
        osmolar_gap.as_ref(),
        &consistency,
    );
    for cause in &clues.promote {
        promote(&mut cause_list.causes, cause);
    }

    let summary = summarize(
        primary_disorder,
        anion_gap.as_ref(),
        compensation.as_ref(),
        &secondary_disorders,
    );

    Ok(BloodGasInterpretation {
        input: input.clone(),
        ph_status,
        primary_disorder,
        anion_gap,
        osmolar_gap,
        compensation,
        delta_ratio,
        consistency,
        secondary_disorders: secondary_disorders.into_iter().map(str::to_string).collect(),
        clinical_clues: clues.notes,
        causes: cause_list.causes,
        mnemonic: cause_list.mnemonic,
        summary,
    })
}

/// The gap is worth computing for a metabolic acidosis, for a normal pH (to
/// expose a hidden gap) and whenever HCO3 is low under a respiratory primary.
fn needs_anion_gap(primary: Disorder, ph_status: PhStatus, hco3: f64) -> bool {
    primary == Disorder::MetabolicAcidosis
        || ph_status == PhStatus::Normal
        || (primary.is_respiratory() && HCO3.below(hco3))
}

/// A raised gap with HCO3 above baseline has no bicarbonate deficit to share
/// with a normal gap acidosis, so it reads as a concurrent metabolic alkalosis
/// whatever the (negative) ratio says.
fn delta_ratio_secondary(delta_ratio: &DeltaRatioResult) -> Option<&'static str> {
    if delta_ratio.delta_hco3 < 0.0 {
        return Some(CONCURRENT_METABOLIC_ALKALOSIS);
    }
    match delta_ratio.status {
        DeltaRatioStatus::PureNagmaHagma => {
            Some("predominant normal anion gap metabolic acidosis")
        }
        DeltaRatioStatus::MixedNagmaHagma => {
            Some("concurrent normal anion gap metabolic acidosis")
        }
        DeltaRatioStatus::Hagma => None,
        DeltaRatioStatus::HagmaMetabolicAlkalosis => Some(CONCURRENT_METABOLIC_ALKALOSIS),
    }
}

fn push_unique(list: &mut Vec<&'static str>, item: &'static str) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// Move a named cause to the front of the list if present.
fn promote(causes: &mut Vec<String>, cause: &str) {
    if let Some(pos) = causes.iter().position(|c| c == cause) {
        let item = causes.remove(pos);
        causes.insert(0, item);
    }
}

struct Clues {
    notes: Vec<String>,
    /// Causes to move to the front, in order of application.
    promote: Vec<&'static str>,
}

fn clinical_clues(
    input: &BloodGasInput,
    primary: Disorder,
    anion_gap: Option<&AnionGapResult>,
    osmolar_gap: Option<&OsmolarGapResult>,
    consistency: &ConsistencyCheck,
) -> Clues {
    let mut clues = Clues {
        notes: Vec::new(),
        promote: Vec::new(),
    };
    let gap_status = anion_gap.map(|ag| ag.status);

    if gap_status == Some(AnionGapStatus::High) {
        if input.glucose.is_some_and(|g| g > HYPERGLYCAEMIA_THRESHOLD) {
            clues.notes.push(
                "Hyperglycaemia with a raised anion gap: consider diabetic ketoacidosis".to_string(),
            );
            clues.promote.push("Diabetic ketoacidosis");
        }
        if input.ketones_present == Some(true) {
            clues.notes.push(
                "Ketones present: ketoacidosis (diabetic, alcoholic or starvation) likely"
                    .to_string(),
            );
            clues.promote.push("Diabetic ketoacidosis");
        }
    }

    if osmolar_gap.is_some_and(|og| og.is_elevated) {
        clues
            .notes
            .push("Elevated osmolar gap: consider toxic alcohol ingestion".to_string());
        if input.vision_changes == Some(true) {
            clues
                .notes
                .push("Visual disturbance with an osmolar gap suggests methanol".to_string());
            clues.promote.push("Methanol");
        }
        if input.calcium_oxalate_crystals == Some(true) {
            clues.notes.push(
                "Calcium oxalate crystalluria with an osmolar gap suggests ethylene glycol"
                    .to_string(),
            );
            clues.promote.push("Ethylene glycol");
        }
    }

    if primary == Disorder::MetabolicAcidosis
        && gap_status == Some(AnionGapStatus::Normal)
        && let Some(k) = input.potassium
    {
        if POTASSIUM.below(k) {
            clues.notes.push(
                "Hypokalaemia with normal gap acidosis: renal tubular acidosis type 1/2 or GI bicarbonate loss"
                    .to_string(),
            );
        } else if POTASSIUM.above(k) {
            clues.notes.push(
                "Hyperkalaemia with normal gap acidosis: renal tubular acidosis type 4 or adrenal insufficiency"
                    .to_string(),
            );
        }
    }

    if gap_status == Some(AnionGapStatus::LowNegative) {
        clues.notes.push(
            "Low anion gap: consider hypoalbuminaemia, paraproteinaemia or laboratory error"
                .to_string(),
        );
    }

    if !consistency.is_consistent {
        clues.notes.push(
            "Measured pH does not agree with pCO2 and HCO3 (Henderson-Hasselbalch); check the sample and transcription"
                .to_string(),
        );
    }

    clues
}

fn summarize(
    primary: Disorder,
    anion_gap: Option<&AnionGapResult>,
    compensation: Option<&CompensationResult>,
    secondary: &[&str],
) -> String {
    let mut summary = match primary {
        Disorder::MetabolicAcidosis => match anion_gap.map(|ag| ag.status) {
            Some(AnionGapStatus::High) => "High anion gap metabolic acidosis".to_string(),
            Some(AnionGapStatus::Normal) => "Normal anion gap metabolic acidosis".to_string(),
            Some(AnionGapStatus::LowNegative) => {
                "Metabolic acidosis with a low anion gap".to_string()
            }
            None => primary.label().to_string(),
        },
        Disorder::RespiratoryAcidosis | Disorder::RespiratoryAlkalosis => {
            let name = primary.label().to_lowercase();
            match compensation.map(|c| (c.status, c.chronicity)) {
                Some((_, Some(Chronicity::Acute))) => format!("Acute {name}"),
                Some((_, Some(Chronicity::Chronic))) => format!("Chronic {name}"),
                Some((CompensationStatus::Appropriate, Some(Chronicity::Unknown))) => {
                    format!("Acute-on-chronic {name}")
                }
                _ => primary.label().to_string(),
            }
        }
        Disorder::Normal if !secondary.is_empty() => {
            "Normal pH, pCO2 and HCO3".to_string()
        }
        Disorder::Normal | Disorder::MetabolicAlkalosis => primary.label().to_string(),
    };

    if !secondary.is_empty() {
        summary.push_str(" with ");
        summary.push_str(&join_natural(secondary));
    }
    summary
}

fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
