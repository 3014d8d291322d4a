//! Blob binding
//!
//! `Vec<u8>` is the canonical Blob binding: the identity contract for the
//! category.

use super::expect_blob;
use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::error::Result;
use crate::value::ColumnValue;

impl ColumnConvert for Vec<u8> {
    const CATEGORY: StorageCategory = StorageCategory::Blob;

    fn to_column(&self) -> ColumnValue {
        ColumnValue::Blob(self.clone())
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        expect_blob("Vec<u8>", value)
    }
}
