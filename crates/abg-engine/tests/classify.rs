use abg_core::models::disorder::{Disorder, PhStatus};
use abg_engine::disorder::classify_disorder;
use abg_engine::ph::classify_ph;
use abg_engine::reference::{HCO3, HCO3_MIDPOINT, PCO2, PCO2_MIDPOINT};

#[test]
fn ph_boundaries_are_inclusive_normal() {
    assert_eq!(classify_ph(7.34), PhStatus::Acidaemia);
    assert_eq!(classify_ph(7.35), PhStatus::Normal);
    assert_eq!(classify_ph(7.40), PhStatus::Normal);
    assert_eq!(classify_ph(7.45), PhStatus::Normal);
    assert_eq!(classify_ph(7.46), PhStatus::Alkalaemia);
}

#[test]
fn all_values_in_range_is_normal() {
    assert_eq!(classify_disorder(7.40, 40.0, 24.0), Disorder::Normal);
    assert_eq!(classify_disorder(7.35, 35.0, 22.0), Disorder::Normal);
    assert_eq!(classify_disorder(7.45, 45.0, 26.0), Disorder::Normal);
}

#[test]
fn low_bicarbonate_with_acid_ph_is_metabolic_acidosis() {
    assert_eq!(classify_disorder(7.39, 30.0, 18.0), Disorder::MetabolicAcidosis);
}

#[test]
fn both_components_acidotic_picks_larger_fractional_deviation() {
    // pCO2 deviates 0.5, HCO3 0.25.
    assert_eq!(classify_disorder(7.10, 60.0, 18.0), Disorder::RespiratoryAcidosis);
    // pCO2 deviates 0.25, HCO3 ~0.42.
    assert_eq!(classify_disorder(7.20, 50.0, 14.0), Disorder::MetabolicAcidosis);
}

#[test]
fn midpoints_follow_reference_ranges() {
    assert_eq!(PCO2.midpoint(), 40.0);
    assert_eq!(HCO3.midpoint(), 24.0);
    assert_eq!(PCO2_MIDPOINT, PCO2.midpoint());
    assert_eq!(HCO3_MIDPOINT, HCO3.midpoint());
}

#[test]
fn equal_fractional_deviation_goes_metabolic() {
    // Both deviate 0.25 from their midpoints.
    assert_eq!(classify_disorder(7.20, 50.0, 18.0), Disorder::MetabolicAcidosis);
    assert_eq!(classify_disorder(7.60, 30.0, 30.0), Disorder::MetabolicAlkalosis);
    // A hair more pCO2 deviation tips it respiratory.
    assert_eq!(classify_disorder(7.20, 50.5, 18.0), Disorder::RespiratoryAcidosis);
}

#[test]
fn alkalaemia_side() {
    assert_eq!(classify_disorder(7.50, 30.0, 22.0), Disorder::RespiratoryAlkalosis);
    assert_eq!(classify_disorder(7.50, 48.0, 36.0), Disorder::MetabolicAlkalosis);
    // pCO2 deviates 0.175, HCO3 0.5.
    assert_eq!(classify_disorder(7.55, 33.0, 36.0), Disorder::MetabolicAlkalosis);
}

#[test]
fn abnormal_ph_with_normal_components_defaults_to_metabolic() {
    assert_eq!(classify_disorder(7.30, 40.0, 24.0), Disorder::MetabolicAcidosis);
    assert_eq!(classify_disorder(7.50, 40.0, 24.0), Disorder::MetabolicAlkalosis);
}

#[test]
fn neutral_ph_tie_break_uses_respiratory_then_metabolic() {
    assert_eq!(classify_disorder(7.40, 50.0, 30.0), Disorder::RespiratoryAcidosis);
    assert_eq!(classify_disorder(7.40, 30.0, 18.0), Disorder::RespiratoryAlkalosis);
    assert_eq!(classify_disorder(7.40, 40.0, 18.0), Disorder::MetabolicAcidosis);
    assert_eq!(classify_disorder(7.40, 40.0, 30.0), Disorder::MetabolicAlkalosis);
}

#[test]
fn non_finite_input_does_not_panic() {
    assert_eq!(classify_disorder(f64::NAN, 40.0, 24.0), Disorder::Normal);
    assert_eq!(classify_ph(f64::NAN), PhStatus::Normal);
    assert_eq!(
        classify_disorder(7.20, f64::INFINITY, 24.0),
        Disorder::RespiratoryAcidosis
    );
}
