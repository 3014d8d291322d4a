//! Storage category taxonomy
//!
//! Every persistable type maps to exactly one of the four physical column
//! kinds the underlying engine natively stores. The mapping is fixed for the
//! type's lifetime; categories never mix for a single type.
//!
//! ## The Four Categories
//!
//! | Category | Physical scalar | Canonical binding |
//! |----------|-----------------|-------------------|
//! | Integer  | `i64`           | `i64`             |
//! | Real     | `f64`           | `f64`             |
//! | Text     | UTF-8 string    | `String`          |
//! | Blob     | byte sequence   | `Vec<u8>`         |
//!
//! NULL is not a category: it is the engine's marker for the absence of a
//! value and is carried by [`ColumnValue::Null`](crate::ColumnValue::Null).

use serde::{Deserialize, Serialize};

/// The four physical column kinds of the storage engine
///
/// This enum identifies which physical representation a persistable type
/// encodes into. Used for statement binding, result routing, and
/// introspection.
///
/// ## Invariant
///
/// This enum MUST have exactly 4 variants - one per native column kind of
/// the engine. The engine's NULL is not a category (see module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageCategory {
    /// 64-bit signed integer column
    ///
    /// Narrower and unsigned native widths widen into this category on
    /// write and truncate out of it on read (two's complement).
    Integer,

    /// 64-bit IEEE-754 floating point column
    Real,

    /// UTF-8 text column
    Text,

    /// Binary blob column
    Blob,
}

impl StorageCategory {
    /// All storage categories (for iteration)
    pub const ALL: [StorageCategory; 4] = [
        StorageCategory::Integer,
        StorageCategory::Real,
        StorageCategory::Text,
        StorageCategory::Blob,
    ];

    /// Get all storage categories as a slice
    pub fn all() -> &'static [StorageCategory] {
        &Self::ALL
    }

    /// Human-readable display name (matches the engine's column type names)
    pub const fn name(&self) -> &'static str {
        match self {
            StorageCategory::Integer => "INTEGER",
            StorageCategory::Real => "REAL",
            StorageCategory::Text => "TEXT",
            StorageCategory::Blob => "BLOB",
        }
    }

    /// Short identifier (for serialization, diagnostics, etc.)
    pub const fn id(&self) -> &'static str {
        match self {
            StorageCategory::Integer => "integer",
            StorageCategory::Real => "real",
            StorageCategory::Text => "text",
            StorageCategory::Blob => "blob",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "integer" => Some(StorageCategory::Integer),
            "real" => Some(StorageCategory::Real),
            "text" => Some(StorageCategory::Text),
            "blob" => Some(StorageCategory::Blob),
            _ => None,
        }
    }
}

impl std::fmt::Display for StorageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
