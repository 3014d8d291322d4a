//! Boolean binding
//!
//! Booleans live in the Integer category. The write path emits exactly 0 or
//! 1; the read path treats any nonzero integer as `true`, matching the
//! engine's permissive storage of boolean columns.

use super::expect_integer;
use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::error::Result;
use crate::value::ColumnValue;

impl ColumnConvert for bool {
    const CATEGORY: StorageCategory = StorageCategory::Integer;

    fn to_column(&self) -> ColumnValue {
        ColumnValue::Integer(i64::from(*self))
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        expect_integer("bool", value).map(|i| i != 0)
    }
}
