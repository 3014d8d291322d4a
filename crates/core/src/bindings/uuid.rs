//! UUID binding
//!
//! `uuid::Uuid` lives in the Blob category as its 16-byte big-endian form.
//! The read path additionally accepts hyphenated text, so rows written by
//! tools that store UUIDs as strings still reconstruct; the write path
//! always emits the blob form.

use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::error::{ConvertError, Result};
use crate::value::ColumnValue;
use uuid::Uuid;

impl ColumnConvert for Uuid {
    const CATEGORY: StorageCategory = StorageCategory::Blob;

    fn to_column(&self) -> ColumnValue {
        ColumnValue::Blob(self.as_bytes().to_vec())
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        match value {
            ColumnValue::Blob(bytes) => {
                let arr: [u8; 16] =
                    bytes
                        .as_slice()
                        .try_into()
                        .map_err(|_| ConvertError::OutOfRange {
                            target: "Uuid",
                            detail: format!("expected a 16-byte blob, got {} bytes", bytes.len()),
                        })?;
                Ok(Uuid::from_bytes(arr))
            }
            ColumnValue::Text(text) => {
                Uuid::parse_str(&text).map_err(|_| ConvertError::MalformedText {
                    target: "Uuid",
                    text,
                })
            }
            ColumnValue::Null => Err(ConvertError::UnexpectedNull { target: "Uuid" }),
            ColumnValue::Integer(_) => Err(ConvertError::CategoryMismatch {
                target: "Uuid",
                expected: StorageCategory::Blob,
                found: StorageCategory::Integer,
            }),
            ColumnValue::Real(_) => Err(ConvertError::CategoryMismatch {
                target: "Uuid",
                expected: StorageCategory::Blob,
                found: StorageCategory::Real,
            }),
        }
    }
}
