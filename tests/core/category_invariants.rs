//! Taxonomy invariants: four categories, fixed per type, never mixed

use crate::common::{Grape, Mood};
use chrono::{DateTime, Utc};
use colval::{ColumnConvert, StorageCategory};
use url::Url;
use uuid::Uuid;

#[test]
fn taxonomy_has_exactly_four_categories() {
    assert_eq!(StorageCategory::all().len(), 4);
}

#[test]
fn every_builtin_maps_to_its_documented_category() {
    assert_eq!(<bool as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<i8 as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<i16 as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<i32 as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<i64 as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<u8 as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<u16 as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<u32 as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<u64 as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<f32 as ColumnConvert>::CATEGORY, StorageCategory::Real);
    assert_eq!(<f64 as ColumnConvert>::CATEGORY, StorageCategory::Real);
    assert_eq!(
        <DateTime<Utc> as ColumnConvert>::CATEGORY,
        StorageCategory::Real
    );
    assert_eq!(<String as ColumnConvert>::CATEGORY, StorageCategory::Text);
    assert_eq!(<Url as ColumnConvert>::CATEGORY, StorageCategory::Text);
    assert_eq!(<Vec<u8> as ColumnConvert>::CATEGORY, StorageCategory::Blob);
    assert_eq!(<Uuid as ColumnConvert>::CATEGORY, StorageCategory::Blob);
}

#[test]
fn adapters_inherit_the_wrapped_category() {
    assert_eq!(<Mood as ColumnConvert>::CATEGORY, StorageCategory::Integer);
    assert_eq!(<Grape as ColumnConvert>::CATEGORY, StorageCategory::Text);
    assert_eq!(
        <Option<Mood> as ColumnConvert>::CATEGORY,
        StorageCategory::Integer
    );
    assert_eq!(
        <Option<Uuid> as ColumnConvert>::CATEGORY,
        StorageCategory::Blob
    );
}

#[test]
fn encoded_values_land_in_the_declared_category() {
    // The category constant and the emitted variant always agree.
    assert_eq!(
        true.to_column().category(),
        Some(<bool as ColumnConvert>::CATEGORY)
    );
    assert_eq!(
        42i64.to_column().category(),
        Some(<i64 as ColumnConvert>::CATEGORY)
    );
    assert_eq!(
        1.5f64.to_column().category(),
        Some(<f64 as ColumnConvert>::CATEGORY)
    );
    assert_eq!(
        "s".to_string().to_column().category(),
        Some(<String as ColumnConvert>::CATEGORY)
    );
    assert_eq!(
        vec![1u8].to_column().category(),
        Some(<Vec<u8> as ColumnConvert>::CATEGORY)
    );
    assert_eq!(
        Uuid::nil().to_column().category(),
        Some(<Uuid as ColumnConvert>::CATEGORY)
    );
    assert_eq!(
        Mood::Happy.to_column().category(),
        Some(<Mood as ColumnConvert>::CATEGORY)
    );
}

#[test]
fn category_introspection_roundtrips() {
    for category in StorageCategory::all() {
        assert_eq!(
            StorageCategory::from_id(category.id()),
            Some(*category),
            "{:?}.id()={} should round-trip",
            category,
            category.id()
        );
    }
}

#[test]
fn category_is_send_sync_copy_hashable() {
    fn assert_traits<T: Send + Sync + Copy + Eq + std::hash::Hash>() {}
    assert_traits::<StorageCategory>();
}
