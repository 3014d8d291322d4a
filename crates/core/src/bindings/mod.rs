//! Built-in scalar bindings
//!
//! # Types
//!
//! | Native type              | Category | Encoding                                   |
//! |--------------------------|----------|--------------------------------------------|
//! | `bool`                   | Integer  | writes 0 or 1; any nonzero reads `true`    |
//! | `i8`, `i16`, `i32`       | Integer  | sign-extend on write, truncate on read     |
//! | `i64`                    | Integer  | identity                                   |
//! | `u8`, `u16`, `u32`       | Integer  | zero-extend on write, truncate on read     |
//! | `u64`                    | Integer  | two's-complement bit-cast, both directions |
//! | `f32`                    | Real     | widen on write, narrow on read             |
//! | `f64`                    | Real     | identity                                   |
//! | `String`                 | Text     | identity                                   |
//! | `Vec<u8>`                | Blob     | identity                                   |
//! | `chrono::DateTime<Utc>`  | Real     | seconds since the Unix epoch               |
//! | `url::Url`               | Text     | absolute-string form                       |
//! | `uuid::Uuid`             | Blob     | 16-byte form (text accepted on read)       |
//!
//! #### Note: Truncation
//!
//! The integer category is fixed at 64-bit signed range. Narrower and
//! unsigned native widths widen losslessly on write; on read they truncate
//! with two's-complement semantics (`as` cast). Truncation is the contract,
//! not an error: reading `0x1_0000_0000` into an `i32` yields `0`.
//!
//! All bindings are pure value transformations with no side effects.

use crate::category::StorageCategory;
use crate::error::{ConvertError, Result};
use crate::value::ColumnValue;

mod blob;
mod bool;
mod datetime;
mod float;
mod int;
mod text;
mod uint;
mod url;
mod uuid;

/// Extract the i64 payload, rejecting NULL and other categories
pub(crate) fn expect_integer(target: &'static str, value: ColumnValue) -> Result<i64> {
    match value {
        ColumnValue::Integer(i) => Ok(i),
        ColumnValue::Null => Err(ConvertError::UnexpectedNull { target }),
        ColumnValue::Real(_) | ColumnValue::Text(_) | ColumnValue::Blob(_) => {
            Err(mismatch(target, StorageCategory::Integer, &value))
        }
    }
}

/// Extract the f64 payload, rejecting NULL and other categories
pub(crate) fn expect_real(target: &'static str, value: ColumnValue) -> Result<f64> {
    match value {
        ColumnValue::Real(r) => Ok(r),
        ColumnValue::Null => Err(ConvertError::UnexpectedNull { target }),
        ColumnValue::Integer(_) | ColumnValue::Text(_) | ColumnValue::Blob(_) => {
            Err(mismatch(target, StorageCategory::Real, &value))
        }
    }
}

/// Extract the text payload, rejecting NULL and other categories
pub(crate) fn expect_text(target: &'static str, value: ColumnValue) -> Result<String> {
    match value {
        ColumnValue::Text(s) => Ok(s),
        ColumnValue::Null => Err(ConvertError::UnexpectedNull { target }),
        ColumnValue::Integer(_) | ColumnValue::Real(_) | ColumnValue::Blob(_) => {
            Err(mismatch(target, StorageCategory::Text, &value))
        }
    }
}

/// Extract the blob payload, rejecting NULL and other categories
pub(crate) fn expect_blob(target: &'static str, value: ColumnValue) -> Result<Vec<u8>> {
    match value {
        ColumnValue::Blob(b) => Ok(b),
        ColumnValue::Null => Err(ConvertError::UnexpectedNull { target }),
        ColumnValue::Integer(_) | ColumnValue::Real(_) | ColumnValue::Text(_) => {
            Err(mismatch(target, StorageCategory::Blob, &value))
        }
    }
}

fn mismatch(target: &'static str, expected: StorageCategory, value: &ColumnValue) -> ConvertError {
    match value.category() {
        Some(found) => ConvertError::CategoryMismatch {
            target,
            expected,
            found,
        },
        None => ConvertError::UnexpectedNull { target },
    }
}
