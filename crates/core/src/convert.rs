//! The column conversion contract
//!
//! This module defines `ColumnConvert`, the capability a type implements to
//! participate in the storage system, plus the two boundary operations the
//! SQL execution layer consumes:
//!
//! - Outbound: [`bind`] turns a native value into its
//!   `(StorageCategory, ColumnValue)` pair for statement binding.
//! - Inbound: [`read`] / [`read_column`] reconstruct a native value from a
//!   delivered result scalar, surfacing a typed failure if reconstruction
//!   is impossible.
//!
//! ## Contract Laws
//!
//! - **Fixed category**: every value of the type encodes into
//!   `Self::CATEGORY`'s variant. Only the nullable adapter may emit `Null`.
//! - **Round trip**: `from_column(to_column(x)) == x` for every `x` in the
//!   type's well-formed domain. Narrowing integer types are exempt outside
//!   their range (see the integer bindings for the truncation rule).
//! - **Purity**: both directions are pure value transformations - no side
//!   effects, no shared state, safe to call from any thread.

use crate::category::StorageCategory;
use crate::error::Result;
use crate::value::ColumnValue;

/// Capability to persist into, and reconstruct from, a storage category
///
/// Implementations are static declarations resolved at compile time; there
/// is no runtime registry and no instance state.
///
/// ## Implementing
///
/// Built-in scalars are covered by this crate. Enumerations with raw values
/// are declared with [`column_enum!`](crate::column_enum). `Option<T>` is
/// covered for every `T: ColumnConvert` by the nullable adapter. A manual
/// implementation is only needed for a new structured scalar, and must
/// uphold the contract laws in the module docs.
pub trait ColumnConvert: Sized {
    /// The storage category every value of this type maps to
    ///
    /// Fixed for the type's lifetime; categories never mix for a single
    /// type.
    const CATEGORY: StorageCategory;

    /// Encode this value into its unified scalar
    ///
    /// Total over the type's well-formed domain and pure.
    fn to_column(&self) -> ColumnValue;

    /// Reconstruct a value from a delivered scalar
    ///
    /// Total over valid physical values of `Self::CATEGORY`; malformed or
    /// mismatched input surfaces as a [`ConvertError`](crate::ConvertError),
    /// never a panic.
    fn from_column(value: ColumnValue) -> Result<Self>;
}

/// Outbound boundary operation: bind a native value
///
/// Produces the `(StorageCategory, ColumnValue)` pair the execution layer
/// hands to its parameterized-statement mechanism.
pub fn bind<T: ColumnConvert>(value: &T) -> (StorageCategory, ColumnValue) {
    (T::CATEGORY, value.to_column())
}

/// Inbound boundary operation: reconstruct a native value
///
/// # Errors
///
/// Returns a [`ConvertError`](crate::ConvertError) if the scalar cannot be
/// mapped back to `T`.
pub fn read<T: ColumnConvert>(value: ColumnValue) -> Result<T> {
    T::from_column(value)
}

/// Inbound boundary operation with column attribution
///
/// Like [`read`], but failures are wrapped with the result column's name so
/// the execution layer can report which column could not be reconstructed.
///
/// # Errors
///
/// Returns a [`ConvertError::Column`](crate::ConvertError::Column) wrapping
/// the underlying failure.
pub fn read_column<T: ColumnConvert>(name: &str, value: ColumnValue) -> Result<T> {
    T::from_column(value).map_err(|e| e.for_column(name))
}
