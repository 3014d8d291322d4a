//! Unsigned integer bindings
//!
//! `u8`, `u16` and `u32` zero-extend losslessly into the 64-bit signed
//! range on write, so their whole domains round-trip. `u64` has no larger
//! signed width to widen into; it bit-casts through `i64` instead, which is
//! bijective, so its whole domain round-trips too - but values above
//! `i64::MAX` are stored as negative integers, which changes their meaning
//! under SQL comparison. Reads truncate with two's-complement semantics
//! like the signed widths.

use super::expect_integer;
use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::error::Result;
use crate::value::ColumnValue;

macro_rules! narrow_uint_binding {
    ($ty:ty) => {
        /// Zero-extends on write; truncates (`as` cast) on read.
        impl ColumnConvert for $ty {
            const CATEGORY: StorageCategory = StorageCategory::Integer;

            fn to_column(&self) -> ColumnValue {
                ColumnValue::Integer(i64::from(*self))
            }

            fn from_column(value: ColumnValue) -> Result<Self> {
                expect_integer(stringify!($ty), value).map(|i| i as $ty)
            }
        }
    };
}

narrow_uint_binding!(u8);
narrow_uint_binding!(u16);
narrow_uint_binding!(u32);

/// Bit-casts through `i64` in both directions (two's complement).
impl ColumnConvert for u64 {
    const CATEGORY: StorageCategory = StorageCategory::Integer;

    fn to_column(&self) -> ColumnValue {
        ColumnValue::Integer(*self as i64)
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        expect_integer("u64", value).map(|i| i as u64)
    }
}
