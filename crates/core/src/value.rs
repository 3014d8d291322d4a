//! Unified column value
//!
//! This module defines `ColumnValue`, the single physical scalar exchanged
//! with the storage engine. Every persistable native type encodes into
//! exactly one of the four category variants; `Null` carries the engine's
//! native NULL.
//!
//! ## Value Rules
//!
//! - Five variants only: Null, Integer, Real, Text, Blob
//! - No implicit type coercions
//! - `Integer(1) != Real(1.0)` - different variants are NEVER equal
//! - `Blob` is not `Text`
//! - Real uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use crate::category::StorageCategory;
use serde::{Deserialize, Serialize};

/// Unified scalar for all column reads and writes
///
/// This enum is the only value shape that crosses the boundary to the SQL
/// execution layer: outbound as a bound statement parameter, inbound as a
/// delivered result column.
///
/// ## Variant Equality
///
/// Different variants are NEVER equal, even if they contain the same
/// "value":
/// - `Integer(1) != Real(1.0)`
/// - `Blob(b"hi") != Text("hi")`
///
/// Real equality follows IEEE-754 semantics:
/// - `NaN != NaN`
/// - `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColumnValue {
    /// The engine's native NULL (absence of a value)
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point (IEEE-754)
    Real(f64),
    /// UTF-8 string
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for ColumnValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ColumnValue::Null, ColumnValue::Null) => true,
            (ColumnValue::Integer(a), ColumnValue::Integer(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (ColumnValue::Real(a), ColumnValue::Real(b)) => a == b,
            (ColumnValue::Text(a), ColumnValue::Text(b)) => a == b,
            (ColumnValue::Blob(a), ColumnValue::Blob(b)) => a == b,
            // Different variants are NEVER equal
            _ => false,
        }
    }
}

impl ColumnValue {
    /// The storage category this value belongs to
    ///
    /// Returns `None` for `Null`: NULL is the absence of a value, not a
    /// fifth category.
    pub const fn category(&self) -> Option<StorageCategory> {
        match self {
            ColumnValue::Null => None,
            ColumnValue::Integer(_) => Some(StorageCategory::Integer),
            ColumnValue::Real(_) => Some(StorageCategory::Real),
            ColumnValue::Text(_) => Some(StorageCategory::Text),
            ColumnValue::Blob(_) => Some(StorageCategory::Blob),
        }
    }

    /// Get the variant name as a string
    pub const fn type_name(&self) -> &'static str {
        match self {
            ColumnValue::Null => "NULL",
            ColumnValue::Integer(_) => "INTEGER",
            ColumnValue::Real(_) => "REAL",
            ColumnValue::Text(_) => "TEXT",
            ColumnValue::Blob(_) => "BLOB",
        }
    }

    /// Check if this is the NULL marker
    pub const fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }

    /// Check if this is an integer value
    pub const fn is_integer(&self) -> bool {
        matches!(self, ColumnValue::Integer(_))
    }

    /// Check if this is a real value
    pub const fn is_real(&self) -> bool {
        matches!(self, ColumnValue::Real(_))
    }

    /// Check if this is a text value
    pub const fn is_text(&self) -> bool {
        matches!(self, ColumnValue::Text(_))
    }

    /// Check if this is a blob value
    pub const fn is_blob(&self) -> bool {
        matches!(self, ColumnValue::Blob(_))
    }

    /// Get as i64 if this is an Integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ColumnValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Real value
    pub fn as_real(&self) -> Option<f64> {
        match self {
            ColumnValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Get as &str if this is a Text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[u8] if this is a Blob value
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            ColumnValue::Blob(b) => Some(b),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for the four canonical scalars
// ============================================================================

impl From<i64> for ColumnValue {
    fn from(i: i64) -> Self {
        ColumnValue::Integer(i)
    }
}

impl From<f64> for ColumnValue {
    fn from(r: f64) -> Self {
        ColumnValue::Real(r)
    }
}

impl From<String> for ColumnValue {
    fn from(s: String) -> Self {
        ColumnValue::Text(s)
    }
}

impl From<&str> for ColumnValue {
    fn from(s: &str) -> Self {
        ColumnValue::Text(s.to_string())
    }
}

impl From<Vec<u8>> for ColumnValue {
    fn from(b: Vec<u8>) -> Self {
        ColumnValue::Blob(b)
    }
}

impl From<&[u8]> for ColumnValue {
    fn from(b: &[u8]) -> Self {
        ColumnValue::Blob(b.to_vec())
    }
}
