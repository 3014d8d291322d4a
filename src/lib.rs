//! colval - Column-value marshalling for embedded SQL storage engines
//!
//! colval maps native Rust types into the four physical column
//! representations an embedded relational engine natively stores (64-bit
//! integer, 64-bit float, text, blob) plus NULL, and reconstructs them,
//! with typed recoverable errors at every reconstruction boundary.
//!
//! # Quick Start
//!
//! ```
//! use colval::{bind, read, column_enum, ColumnValue, StorageCategory};
//!
//! column_enum! {
//!     /// Payment states persisted in the `state` column.
//!     pub enum PaymentState: i64 {
//!         Pending = 0,
//!         Settled = 1,
//!         Refunded = 2,
//!     }
//! }
//!
//! // Outbound: a native value becomes a (category, scalar) pair the
//! // execution layer binds into its parameterized statement.
//! let (category, scalar) = bind(&PaymentState::Settled);
//! assert_eq!(category, StorageCategory::Integer);
//! assert_eq!(scalar, ColumnValue::Integer(1));
//!
//! // Inbound: a delivered result scalar reconstructs the native value.
//! let state: PaymentState = read(scalar)?;
//! assert_eq!(state, PaymentState::Settled);
//!
//! // Nullable columns are Option<T> - NULL round-trips as None.
//! let absent: Option<PaymentState> = read(ColumnValue::Null)?;
//! assert_eq!(absent, None);
//! # Ok::<(), colval::ConvertError>(())
//! ```
//!
//! # Architecture
//!
//! Every persistable type implements [`ColumnConvert`], fixing its
//! [`StorageCategory`] and both conversion directions. Built-in scalars
//! are covered; enumerations are declared with [`column_enum!`]; `Option`
//! lifts any bound type into the same category with NULL as absence.
//! Reconstruction failures are typed [`ConvertError`] values - never a
//! panic.

// Re-export the public API from colval-core
pub use colval_core::*;

pub use colval_core::column_enum;
