use abg_core::models::input::BloodGasInput;
use abg_engine::validation::{validate_field, validate_input};

#[test]
fn plausible_panel_has_no_errors() {
    let input = BloodGasInput::gas(7.26, 23.0, 10.0)
        .with_electrolytes(140.0, 100.0)
        .with_albumin(3.0)
        .with_osmolality(300.0, 5.0, 5.0);
    assert!(validate_input(&input).is_empty());
}

#[test]
fn out_of_range_fields_are_reported() {
    let mut input = BloodGasInput::gas(8.1, 40.0, 24.0);
    input.albumin = Some(9.0);

    let errors = validate_input(&input);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "ph");
    assert_eq!(errors[1].field, "albumin");
    assert!(errors[0].message.contains("outside range"));
    assert!(errors[0].expected_range.is_some());
}

#[test]
fn non_finite_values_fail() {
    let err = validate_field("hco3", f64::NAN).unwrap_err();
    assert!(err.message.contains("not a finite number"));
    assert!(validate_field("some_unlisted_field", f64::INFINITY).is_err());
}

#[test]
fn unlisted_fields_only_need_to_be_finite() {
    assert!(validate_field("some_unlisted_field", 1e6).is_ok());
}
