//! Floating point bindings
//!
//! `f64` is the canonical Real binding: the identity contract for the
//! category. `f32` widens losslessly on write and narrows (`as` cast) on
//! read; every `f32` round-trips because f32 -> f64 is exact.

use super::expect_real;
use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::error::Result;
use crate::value::ColumnValue;

impl ColumnConvert for f64 {
    const CATEGORY: StorageCategory = StorageCategory::Real;

    fn to_column(&self) -> ColumnValue {
        ColumnValue::Real(*self)
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        expect_real("f64", value)
    }
}

impl ColumnConvert for f32 {
    const CATEGORY: StorageCategory = StorageCategory::Real;

    fn to_column(&self) -> ColumnValue {
        ColumnValue::Real(f64::from(*self))
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        expect_real("f32", value).map(|r| r as f32)
    }
}
