//! Enumeration adaptation invariants

use crate::common::{Grape, Mood};
use colval::{
    column_enum, validate_cases, ColumnConvert, ColumnValue, ConvertError, EnumColumn,
    StorageCategory,
};

#[test]
fn every_case_roundtrips() {
    for case in Mood::CASES {
        assert_eq!(Mood::from_column(case.to_column()), Ok(*case));
    }
    for case in Grape::CASES {
        assert_eq!(Grape::from_column(case.to_column()), Ok(*case));
    }
}

#[test]
fn write_path_delegates_to_raw_value() {
    assert_eq!(Mood::Happy.to_column(), ColumnValue::Integer(1));
    assert_eq!(Mood::Angry.to_column(), ColumnValue::Integer(3));
    assert_eq!(
        Grape::Merlot.to_column(),
        ColumnValue::Text("merlot".to_string())
    );
}

#[test]
fn unmatched_raw_value_is_no_matching_case() {
    let err = Mood::from_column(ColumnValue::Integer(0)).unwrap_err();
    assert_eq!(
        err,
        ConvertError::NoMatchingCase {
            target: "Mood",
            raw: ColumnValue::Integer(0),
        }
    );

    let err = Grape::from_column(ColumnValue::Text("zinfandel".to_string())).unwrap_err();
    assert_eq!(
        err,
        ConvertError::NoMatchingCase {
            target: "Grape",
            raw: ColumnValue::Text("zinfandel".to_string()),
        }
    );
}

#[test]
fn no_silent_default_case() {
    // Every raw value outside the case table fails; none fall back.
    for n in [-1i64, 0, 4, 100, i64::MAX] {
        assert!(Mood::from_column(ColumnValue::Integer(n)).is_err());
    }
}

#[test]
fn wrong_category_raw_names_the_enum() {
    let err = Mood::from_column(ColumnValue::Text("1".to_string())).unwrap_err();
    assert_eq!(
        err,
        ConvertError::CategoryMismatch {
            target: "Mood",
            expected: StorageCategory::Integer,
            found: StorageCategory::Text,
        }
    );
}

#[test]
fn declared_enums_have_unique_raw_values() {
    assert_eq!(validate_cases::<Mood>(), Ok(()));
    assert_eq!(validate_cases::<Grape>(), Ok(()));
}

#[test]
fn duplicate_raw_values_fail_validation() {
    column_enum! {
        enum Doubled: i64 {
            First = 7,
            Second = 8,
            Shadow = 7,
        }
    }

    assert_eq!(
        validate_cases::<Doubled>(),
        Err(ConvertError::DuplicateRawValue {
            target: "Doubled",
            raw: ColumnValue::Integer(7),
        })
    );
}

#[test]
fn case_table_is_declaration_ordered() {
    assert_eq!(Mood::CASES, &[Mood::Happy, Mood::Sad, Mood::Angry]);
    assert_eq!(
        Grape::CASES,
        &[Grape::Chardonnay, Grape::Merlot, Grape::Riesling]
    );
}

#[test]
fn enum_values_are_threadsafe_value_types() {
    fn assert_traits<T: Send + Sync + Copy + Eq + std::hash::Hash>() {}
    assert_traits::<Mood>();
    assert_traits::<Grape>();
}
