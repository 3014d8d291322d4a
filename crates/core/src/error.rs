//! Error types for column-value conversion
//!
//! This module defines the failure taxonomy for the conversion layer.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! ## Taxonomy
//!
//! - **Reconstruction failures**: a delivered physical value cannot be
//!   mapped back to the native type (`MalformedText`, `NoMatchingCase`,
//!   `CategoryMismatch`, `UnexpectedNull`, `OutOfRange`). Always returned
//!   to the caller, never a panic.
//! - **Configuration errors**: a binding is mis-declared
//!   (`DuplicateRawValue`). Surfaced by explicit validation so setup fails
//!   fast instead of producing runtime mismatches later.
//!
//! Range narrowing (a 64-bit integer read into a narrower native width) is
//! NOT an error: it truncates deterministically, by contract. See the
//! integer bindings.

use crate::category::StorageCategory;
use crate::value::ColumnValue;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error types for column-value conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Structured text could not be parsed back into the native type
    #[error("malformed text for {target}: {text:?}")]
    MalformedText {
        /// Native type being reconstructed
        target: &'static str,
        /// The offending text
        text: String,
    },

    /// No enumeration case has the delivered raw value
    #[error("no case of {target} matches raw value {raw:?}")]
    NoMatchingCase {
        /// Enumeration type being reconstructed
        target: &'static str,
        /// The delivered raw value
        raw: ColumnValue,
    },

    /// Delivered scalar belongs to the wrong storage category
    #[error("category mismatch for {target}: expected {expected}, found {found}")]
    CategoryMismatch {
        /// Native type being reconstructed
        target: &'static str,
        /// Category the type is bound to
        expected: StorageCategory,
        /// Category of the delivered scalar
        found: StorageCategory,
    },

    /// NULL delivered to a non-nullable type
    #[error("unexpected NULL for non-nullable {target}")]
    UnexpectedNull {
        /// Native type being reconstructed
        target: &'static str,
    },

    /// Valid scalar with no representation in the target's domain
    #[error("value out of range for {target}: {detail}")]
    OutOfRange {
        /// Native type being reconstructed
        target: &'static str,
        /// What made the value unrepresentable
        detail: String,
    },

    /// Two enumeration cases share a raw value
    #[error("duplicate raw value {raw:?} across cases of {target}")]
    DuplicateRawValue {
        /// Enumeration type being validated
        target: &'static str,
        /// The raw value claimed by more than one case
        raw: ColumnValue,
    },

    /// A conversion failure attributed to a specific result column
    #[error("column {name:?}: {source}")]
    Column {
        /// Name of the result column
        name: String,
        /// The underlying conversion failure
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Attribute this failure to a named result column
    ///
    /// Used at the execution boundary so reconstruction failures identify
    /// the column they came from. Idempotent attribution is the caller's
    /// concern; wrapping twice nests.
    pub fn for_column(self, name: impl Into<String>) -> Self {
        ConvertError::Column {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// Rewrite the target type name on a reconstruction failure
    ///
    /// Adapters that delegate to an inner binding (enumerations delegating
    /// to their raw value) use this so failures name the outer type the
    /// caller asked for.
    pub(crate) fn retarget(self, target: &'static str) -> Self {
        match self {
            ConvertError::MalformedText { text, .. } => {
                ConvertError::MalformedText { target, text }
            }
            ConvertError::NoMatchingCase { raw, .. } => {
                ConvertError::NoMatchingCase { target, raw }
            }
            ConvertError::CategoryMismatch {
                expected, found, ..
            } => ConvertError::CategoryMismatch {
                target,
                expected,
                found,
            },
            ConvertError::UnexpectedNull { .. } => ConvertError::UnexpectedNull { target },
            ConvertError::OutOfRange { detail, .. } => {
                ConvertError::OutOfRange { target, detail }
            }
            ConvertError::DuplicateRawValue { raw, .. } => {
                ConvertError::DuplicateRawValue { target, raw }
            }
            // Column attribution is already outermost context; keep it.
            other @ ConvertError::Column { .. } => other,
        }
    }
}
