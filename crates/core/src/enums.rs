//! Enumeration adaptation
//!
//! Any enumerated type whose raw value already has a conversion contract
//! participates in the category system automatically: the enum's category
//! is inherited from its raw value's category.
//!
//! - Write path: case -> raw value -> unified scalar.
//! - Read path: unified scalar -> raw value -> case lookup over the full
//!   case set. An unmatched raw value is a typed
//!   [`NoMatchingCase`](crate::ConvertError::NoMatchingCase) failure, never
//!   a silent default.
//!
//! Declare enums with [`column_enum!`](crate::column_enum); it generates
//! the case table and both trait impls, so call sites carry no per-type
//! boilerplate:
//!
//! ```
//! use colval_core::{column_enum, ColumnConvert, ColumnValue};
//!
//! column_enum! {
//!     /// Job states persisted in the `state` column.
//!     pub enum JobState: i64 {
//!         Queued = 0,
//!         Running = 1,
//!         Done = 2,
//!     }
//! }
//!
//! assert_eq!(JobState::Running.to_column(), ColumnValue::Integer(1));
//! assert_eq!(JobState::from_column(ColumnValue::Integer(2)), Ok(JobState::Done));
//! ```
//!
//! ## Configuration errors
//!
//! A case set in which two cases share a raw value is a configuration
//! error: lookups would silently resolve to whichever case is declared
//! first. [`validate_cases`] detects this; run it once at startup (or in a
//! test) for every declared enum so mis-declarations fail fast instead of
//! surfacing as wrong-case reads later. The conversion functions themselves
//! stay pure and stateless, so they do not re-validate per call.

use crate::convert::ColumnConvert;
use crate::error::{ConvertError, Result};
use crate::value::ColumnValue;

/// Capability of an enumerated type with a persistable raw value
///
/// The full case set must be enumerable (`CASES`) so reads can resolve a
/// raw value back to a case and validation can check raw-value uniqueness.
/// Implement via [`column_enum!`](crate::column_enum) rather than by hand.
pub trait EnumColumn: Sized + Copy + PartialEq + 'static {
    /// The raw value type each case is persisted through
    type Raw: ColumnConvert + PartialEq;

    /// Type name used in error attribution
    const NAME: &'static str;

    /// Every case, exactly once, in declaration order
    const CASES: &'static [Self];

    /// The raw value bound to this case
    fn raw_value(&self) -> Self::Raw;
}

/// Encode a case through its raw value
pub fn to_column<E: EnumColumn>(case: &E) -> ColumnValue {
    case.raw_value().to_column()
}

/// Reconstruct a case from a delivered scalar via case lookup
///
/// # Errors
///
/// Raw-value reconstruction failures are retargeted to name the enum; a
/// raw value matching no case yields
/// [`NoMatchingCase`](crate::ConvertError::NoMatchingCase).
pub fn from_column<E: EnumColumn>(value: ColumnValue) -> Result<E> {
    let raw = E::Raw::from_column(value.clone()).map_err(|e| e.retarget(E::NAME))?;
    E::CASES
        .iter()
        .copied()
        .find(|case| case.raw_value() == raw)
        .ok_or(ConvertError::NoMatchingCase {
            target: E::NAME,
            raw: value,
        })
}

/// Check raw-value uniqueness across an enum's case set
///
/// # Errors
///
/// Returns [`DuplicateRawValue`](crate::ConvertError::DuplicateRawValue)
/// naming the first raw value claimed by more than one case.
pub fn validate_cases<E: EnumColumn>() -> Result<()> {
    for (index, case) in E::CASES.iter().enumerate() {
        for later in &E::CASES[index + 1..] {
            if case.raw_value() == later.raw_value() {
                return Err(ConvertError::DuplicateRawValue {
                    target: E::NAME,
                    raw: case.raw_value().to_column(),
                });
            }
        }
    }
    Ok(())
}

/// Declare an enumeration persisted through a raw value
///
/// Expands to the enum itself plus its [`EnumColumn`] and
/// [`ColumnConvert`](crate::ColumnConvert) impls. The raw value expression
/// for each case is converted with `Into`, so integer literals work for
/// integer raws and string literals for `String` raws.
///
/// ```
/// use colval_core::{column_enum, ColumnConvert, ColumnValue};
///
/// column_enum! {
///     pub enum Severity: String {
///         Info = "info",
///         Warn = "warn",
///         Error = "error",
///     }
/// }
///
/// assert_eq!(Severity::Warn.to_column(), ColumnValue::Text("warn".into()));
/// ```
#[macro_export]
macro_rules! column_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $raw:ty {
            $($(#[$case_meta:meta])* $case:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$case_meta])* $case),+
        }

        impl $crate::EnumColumn for $name {
            type Raw = $raw;

            const NAME: &'static str = stringify!($name);

            const CASES: &'static [Self] = &[$(Self::$case),+];

            fn raw_value(&self) -> Self::Raw {
                match self {
                    $(Self::$case => ($value).into()),+
                }
            }
        }

        impl $crate::ColumnConvert for $name {
            const CATEGORY: $crate::StorageCategory =
                <$raw as $crate::ColumnConvert>::CATEGORY;

            fn to_column(&self) -> $crate::ColumnValue {
                $crate::enums::to_column(self)
            }

            fn from_column(value: $crate::ColumnValue) -> $crate::Result<Self> {
                $crate::enums::from_column(value)
            }
        }
    };
}
