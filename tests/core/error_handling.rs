//! Reconstruction failures are typed and recoverable, never a halt

use crate::common::Mood;
use colval::{read_column, ColumnConvert, ColumnValue, ConvertError, StorageCategory};
use url::Url;
use uuid::Uuid;

#[test]
fn malformed_url_text_is_a_typed_error() {
    let result = Url::from_column(ColumnValue::Text("definitely not a url".to_string()));
    assert_eq!(
        result,
        Err(ConvertError::MalformedText {
            target: "Url",
            text: "definitely not a url".to_string(),
        })
    );
}

#[test]
fn malformed_uuid_text_is_a_typed_error() {
    let result = Uuid::from_column(ColumnValue::Text("xyz".to_string()));
    assert_eq!(
        result,
        Err(ConvertError::MalformedText {
            target: "Uuid",
            text: "xyz".to_string(),
        })
    );
}

#[test]
fn short_uuid_blob_is_out_of_range() {
    let err = Uuid::from_column(ColumnValue::Blob(vec![1, 2, 3])).unwrap_err();
    assert!(matches!(err, ConvertError::OutOfRange { target: "Uuid", .. }));
}

#[test]
fn category_mismatch_names_both_categories() {
    let err = String::from_column(ColumnValue::Integer(1)).unwrap_err();
    assert_eq!(
        err,
        ConvertError::CategoryMismatch {
            target: "String",
            expected: StorageCategory::Text,
            found: StorageCategory::Integer,
        }
    );
}

#[test]
fn null_into_non_nullable_is_unexpected_null() {
    assert_eq!(
        i64::from_column(ColumnValue::Null),
        Err(ConvertError::UnexpectedNull { target: "i64" })
    );
    assert_eq!(
        Mood::from_column(ColumnValue::Null),
        Err(ConvertError::UnexpectedNull { target: "Mood" })
    );
}

#[test]
fn failures_attribute_to_the_offending_column() {
    let err = read_column::<Url>("homepage", ColumnValue::Text("%%%".to_string())).unwrap_err();
    match err {
        ConvertError::Column { name, source } => {
            assert_eq!(name, "homepage");
            assert!(matches!(
                *source,
                ConvertError::MalformedText { target: "Url", .. }
            ));
        }
        other => panic!("expected column attribution, got {:?}", other),
    }
}

#[test]
fn column_attribution_appears_in_display() {
    let err = read_column::<i64>("age", ColumnValue::Null).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("age"));
    assert!(msg.contains("unexpected NULL"));
}

#[test]
fn errors_are_std_errors_with_sources() {
    use std::error::Error;

    let err = read_column::<i64>("age", ColumnValue::Null).unwrap_err();
    assert!(err.source().is_some());

    let direct = i64::from_column(ColumnValue::Null).unwrap_err();
    assert!(direct.source().is_none());
}

#[test]
fn errors_are_send_sync_clonable() {
    fn assert_traits<T: Send + Sync + Clone>() {}
    assert_traits::<ConvertError>();
}

#[test]
fn recovery_after_failure_is_ordinary_control_flow() {
    // A failed reconstruction leaves the caller free to fall back.
    let raw = ColumnValue::Text("not a url".to_string());
    let url = Url::from_column(raw.clone())
        .unwrap_or_else(|_| Url::parse("https://fallback.invalid/").unwrap());
    assert_eq!(url.as_str(), "https://fallback.invalid/");

    // And the original scalar is still readable as its actual type.
    assert_eq!(String::from_column(raw), Ok("not a url".to_string()));
}
