//! Text binding
//!
//! `String` is the canonical Text binding: the identity contract for the
//! category.

use super::expect_text;
use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::error::Result;
use crate::value::ColumnValue;

impl ColumnConvert for String {
    const CATEGORY: StorageCategory = StorageCategory::Text;

    fn to_column(&self) -> ColumnValue {
        ColumnValue::Text(self.clone())
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        expect_text("String", value)
    }
}
