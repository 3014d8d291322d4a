//! Core types and traits for colval
//!
//! This crate defines the column-value marshalling layer consumed by the
//! surrounding SQL execution layer:
//! - StorageCategory: the four physical column kinds of the engine
//! - ColumnValue: the unified scalar exchanged with the engine
//! - ConvertError: typed, recoverable failure taxonomy
//! - ColumnConvert: the conversion capability + bind/read boundary ops
//! - Built-in bindings for the standard scalar types
//! - Enumeration adaptation via raw values (`column_enum!`)
//! - Nullable adaptation via `Option<T>`

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod bindings;
pub mod category;
pub mod convert;
pub mod enums;
pub mod error;
pub mod nullable;
pub mod value;

// Re-export commonly used types and traits
pub use category::StorageCategory;
pub use convert::{bind, read, read_column, ColumnConvert};
pub use enums::{validate_cases, EnumColumn};
pub use error::{ConvertError, Result};
pub use nullable::cases_with_absent;
pub use value::ColumnValue;
