//! Segment behavior scenarios: repetition limits, probing, unknown slots and
//! generated accessors.

mod common;

use std::sync::Arc;

use codec::segments::{ErrSegment, MsaSegment, ObxSegment, PidSegment};
use codec::types::DatatypeId;
use codec::{
    Lifecycle, SegmentRegistry, SegmentValidator, StandardInstantiator, StoreError, TextValue,
    ValidationPolicy,
};
use common::{context, scenario_segment};

#[test]
fn test_required_and_capped_slots() {
    let mut segment = scenario_segment();
    segment.append_raw(1, "ID-1").unwrap();
    segment.append_raw(2, "A^Alpha").unwrap();
    segment.append_raw(2, "B^Beta").unwrap();

    assert_eq!(segment.repetition_count(1), Ok(1));
    assert_eq!(segment.repetition_count(2), Ok(2));
    assert!(matches!(
        segment.get_value(2, 2),
        Err(StoreError::RepetitionOutOfRange {
            slot: 2,
            repetition: 2,
            count: 2,
            ..
        })
    ));

    assert_eq!(segment.append_raw(2, "C^Gamma"), Ok(2));
    assert!(matches!(
        segment.append_raw(2, "D^Delta"),
        Err(StoreError::RepetitionLimitExceeded { slot: 2, max: 3, .. })
    ));
    assert_eq!(segment.repetition_count(2), Ok(3));

    // Non-repeating slot is capped at one
    assert!(matches!(
        segment.append_raw(1, "ID-2"),
        Err(StoreError::RepetitionLimitExceeded { slot: 1, max: 1, .. })
    ));
}

#[test]
fn test_slot_99_is_unknown_regardless_of_population() {
    let empty = scenario_segment();
    assert!(matches!(
        empty.get_value(99, 0),
        Err(StoreError::UnknownSlot { slot: 99, slot_count: 3, .. })
    ));

    let mut populated = scenario_segment();
    populated.populate(vec![vec!["ID"], vec!["A", "B"], vec!["note"]]).unwrap();
    assert!(matches!(
        populated.get_value(99, 0),
        Err(StoreError::UnknownSlot { slot: 99, .. })
    ));

    let pid = PidSegment::new(context(), Arc::new(StandardInstantiator));
    assert!(matches!(
        pid.get_value(99, 0),
        Err(StoreError::UnknownSlot { slot: 99, slot_count: 39, .. })
    ));
}

#[test]
fn test_count_first_probing_never_fails() {
    let mut segment = scenario_segment();
    segment.append_raw(3, "first").unwrap();

    for slot in 1..=segment.slot_count() {
        let count = segment.repetition_count(slot).unwrap();
        for repetition in 0..count {
            assert!(segment.get_value(slot, repetition).is_ok());
        }
    }
}

#[test]
fn test_construction_failure_is_not_masked() {
    let mut msa = MsaSegment::new(context(), Arc::new(StandardInstantiator));
    msa.append_raw(4, "12x").unwrap();

    let err = msa.expected_sequence_number(0).unwrap_err();
    assert!(matches!(
        &err,
        StoreError::DatatypeConstruction { slot: 4, repetition: 0, .. }
    ));
    assert!(std::error::Error::source(&err).is_some());

    // Failure leaves the repetition raw; it is retried, and fails again
    assert_eq!(msa.store().is_materialized(4, 0), Ok(false));
    assert!(msa.expected_sequence_number(0).is_err());
}

#[test]
fn test_generated_accessors() {
    let mut obx = ObxSegment::new(context(), Arc::new(StandardInstantiator));
    obx.append_raw(1, "1").unwrap();
    obx.append_raw(2, "NM").unwrap();
    obx.append_raw(3, "8867-4^Heart rate^LN").unwrap();
    obx.append_raw(5, "72").unwrap();
    obx.append_value(5, Box::new(TextValue::new(DatatypeId::Nm, "74")))
        .unwrap();
    obx.append_raw(11, "F").unwrap();
    obx.append_raw(14, "20240101120000").unwrap();

    assert_eq!(obx.set_id(0).unwrap().encode(), "1");
    assert_eq!(obx.observation_value_count(), Ok(2));
    let values: Vec<String> = obx
        .observation_value_all()
        .unwrap()
        .into_iter()
        .map(|value| value.encode())
        .collect();
    assert_eq!(values, vec!["72", "74"]);
    assert_eq!(
        obx.date_time_of_the_observation(0).unwrap().datatype(),
        DatatypeId::Ts
    );
    assert_eq!(obx.units_count(), Ok(0));
}

#[test]
fn test_datatype_mismatch_on_append() {
    let mut err = ErrSegment::new(context(), Arc::new(StandardInstantiator));
    let result = err.append_value(1, Box::new(TextValue::new(DatatypeId::St, "oops")));
    assert!(matches!(
        result,
        Err(StoreError::DatatypeMismatch { slot: 1, .. })
    ));
    assert_eq!(err.repetition_count(1), Ok(0));
}

#[test]
fn test_wrapper_round_trips_through_generic_segment() {
    let pid = PidSegment::new(context(), Arc::new(StandardInstantiator));
    assert_eq!(pid.lifecycle(), Lifecycle::Populated);

    let generic = pid.into_segment();
    assert!(MsaSegment::from_segment(
        SegmentRegistry::instantiate("MSA", context(), Arc::new(StandardInstantiator)).unwrap()
    )
    .is_some());
    let pid = PidSegment::from_segment(generic).unwrap();
    assert_eq!(PidSegment::ID, "PID");
    assert!(ObxSegment::from_segment(pid.into()).is_none());
}

#[test]
fn test_settings_drive_materialization_and_validation() {
    let settings = config::StoreSettings::from_toml_str(
        "[validation]\nstrict = true\n[materialization]\neager = true\n",
    )
    .unwrap();

    let mut msa = SegmentRegistry::instantiate("MSA", context(), Arc::new(StandardInstantiator))
        .unwrap()
        .with_eager_materialization(settings.materialization.eager);
    msa.populate(vec![vec!["AA"], vec!["MSG00001"]]).unwrap();
    assert_eq!(msa.store().is_materialized(1, 0), Ok(true));

    let validator = SegmentValidator::new(ValidationPolicy::from(&settings.validation));
    assert!(validator.policy().strict);
    assert!(validator.check(&msa).unwrap().is_valid());

    // Eager population surfaces construction failures immediately
    let mut bad = SegmentRegistry::instantiate("MSA", context(), Arc::new(StandardInstantiator))
        .unwrap()
        .with_eager_materialization(true);
    let err = bad
        .populate(vec![vec!["AA"], vec!["MSG00002"], vec![], vec!["n/a"]])
        .unwrap_err();
    assert!(matches!(err, StoreError::DatatypeConstruction { slot: 4, .. }));
}

#[test]
fn test_failed_population_appends_nothing() {
    let mut segment = scenario_segment();
    let result = segment.populate(vec![vec!["ID"], vec!["A", "B"], vec!["n"], vec!["extra"]]);
    assert!(matches!(result, Err(StoreError::UnknownSlot { slot: 4, .. })));
    for slot in 1..=segment.slot_count() {
        assert_eq!(segment.repetition_count(slot), Ok(0));
    }

    let result = segment.populate(vec![vec!["ID"], vec!["A", "B", "C", "D"]]);
    assert!(matches!(
        result,
        Err(StoreError::RepetitionLimitExceeded { slot: 2, .. })
    ));
    for slot in 1..=segment.slot_count() {
        assert_eq!(segment.repetition_count(slot), Ok(0));
    }
}
