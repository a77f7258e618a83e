use abg_core::models::anion_gap::AnionGapStatus;
use abg_core::models::compensation::Chronicity;
use abg_core::models::disorder::Disorder;
use abg_engine::causes::{lookup, lookup_by_id};

#[test]
fn high_gap_acidosis_uses_mudpiles() {
    let list = lookup(
        Disorder::MetabolicAcidosis,
        Some(AnionGapStatus::High),
        None,
    );
    assert_eq!(list.mnemonic.as_deref(), Some("MUDPILES"));
    assert_eq!(list.causes.len(), 8);
    assert_eq!(list.causes[0], "Methanol");
}

#[test]
fn acidosis_without_gap_status_combines_tables() {
    let list = lookup(Disorder::MetabolicAcidosis, None, None);
    assert_eq!(list.causes.len(), 15);
    assert_eq!(list.mnemonic, None);
}

#[test]
fn low_gap_has_no_mnemonic() {
    let list = lookup(
        Disorder::MetabolicAcidosis,
        Some(AnionGapStatus::LowNegative),
        None,
    );
    assert_eq!(list.causes[0], "Hypoalbuminaemia");
    assert_eq!(list.mnemonic, None);
}

#[test]
fn respiratory_tables_keyed_by_chronicity() {
    let chronic = lookup(
        Disorder::RespiratoryAcidosis,
        None,
        Some(Chronicity::Chronic),
    );
    assert_eq!(chronic.causes[0], "COPD");

    let acute = lookup(Disorder::RespiratoryAlkalosis, None, Some(Chronicity::Acute));
    assert_eq!(acute.mnemonic.as_deref(), Some("CHAMPS"));

    let unknown = lookup(
        Disorder::RespiratoryAcidosis,
        None,
        Some(Chronicity::Unknown),
    );
    assert_eq!(unknown.causes.len(), 11);
}

#[test]
fn normal_and_unknown_disorders_are_empty() {
    assert!(lookup(Disorder::Normal, None, None).causes.is_empty());
    let unknown = lookup_by_id("lactic_chaos", None, None);
    assert!(unknown.causes.is_empty());
    assert_eq!(unknown.mnemonic, None);
}

#[test]
fn lookup_by_id_parses_wire_names() {
    let list = lookup_by_id("metabolic_alkalosis", None, None);
    assert_eq!(list.mnemonic.as_deref(), Some("CLEVER PD"));
}
