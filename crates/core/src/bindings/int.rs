//! Signed integer bindings
//!
//! `i64` is the canonical Integer binding: the identity contract for the
//! category. Narrower widths sign-extend into 64 bits on write and truncate
//! out of them on read with two's-complement semantics.

use super::expect_integer;
use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::error::Result;
use crate::value::ColumnValue;

impl ColumnConvert for i64 {
    const CATEGORY: StorageCategory = StorageCategory::Integer;

    fn to_column(&self) -> ColumnValue {
        ColumnValue::Integer(*self)
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        expect_integer("i64", value)
    }
}

macro_rules! narrow_int_binding {
    ($ty:ty) => {
        /// Sign-extends on write; truncates (`as` cast) on read.
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

narrow_int_binding!(i8);
narrow_int_binding!(i16);
narrow_int_binding!(i32);
