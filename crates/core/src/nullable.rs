//! Nullable adaptation
//!
//! `Option<T>` represents "no value" for any already-bound type without
//! each type independently modeling absence. The wrapper binds to the same
//! category as `T`:
//!
//! - Write: `None` -> the engine's native NULL marker; `Some(v)` -> `v`'s
//!   encoding. NULL is disjoint from every valid encoded value of `T`, so
//!   absence is never an in-band sentinel.
//! - Read: NULL -> `None`; any other valid scalar -> `Some(v)`.
//!
//! Absence is a first-class tagged union with its own conversion
//! capability; it never borrows the wrapped type's raw-value interface.

use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::enums::EnumColumn;
use crate::error::Result;
use crate::value::ColumnValue;

impl<T: ColumnConvert> ColumnConvert for Option<T> {
    const CATEGORY: StorageCategory = T::CATEGORY;

    fn to_column(&self) -> ColumnValue {
        match self {
            None => ColumnValue::Null,
            Some(value) => value.to_column(),
        }
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        match value {
            ColumnValue::Null => Ok(None),
            other => T::from_column(other).map(Some),
        }
    }
}

/// The enumerable case set of a nullable enumeration
///
/// Exactly `E::CASES.len() + 1` distinct entries: absent first, then every
/// wrapped case once, in declaration order.
pub fn cases_with_absent<E: EnumColumn>() -> Vec<Option<E>> {
    let mut cases = Vec::with_capacity(E::CASES.len() + 1);
    cases.push(None);
    cases.extend(E::CASES.iter().copied().map(Some));
    cases
}
