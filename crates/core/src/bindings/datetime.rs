//! Timestamp binding
//!
//! `chrono::DateTime<Utc>` lives in the Real category, encoded as seconds
//! since the Unix epoch (fractional part carries sub-second precision).
//!
//! ## Well-formed domain
//!
//! The f64 mantissa limits sub-second fidelity: around the present epoch,
//! precision is on the order of hundreds of nanoseconds. Timestamps at
//! microsecond or coarser granularity round-trip exactly; arbitrary
//! nanosecond values are outside the round-trip domain. Reconstruction
//! rejects non-finite and out-of-range seconds with a typed error.

use super::expect_real;
use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::error::{ConvertError, Result};
use crate::value::ColumnValue;
use chrono::{DateTime, Utc};

const TARGET: &str = "DateTime<Utc>";

impl ColumnConvert for DateTime<Utc> {
    const CATEGORY: StorageCategory = StorageCategory::Real;

    fn to_column(&self) -> ColumnValue {
        // timestamp() floors toward negative infinity and subsec nanos are
        // always non-negative, so the sum is correct for pre-epoch times.
        let secs = self.timestamp() as f64 + f64::from(self.timestamp_subsec_nanos()) / 1e9;
        ColumnValue::Real(secs)
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        let secs = expect_real(TARGET, value)?;
        if !secs.is_finite() {
            return Err(ConvertError::OutOfRange {
                target: TARGET,
                detail: format!("non-finite seconds {}", secs),
            });
        }

        let whole = secs.floor();
        if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
            return Err(ConvertError::OutOfRange {
                target: TARGET,
                detail: format!("seconds {} exceed the representable range", secs),
            });
        }

        let mut secs_part = whole as i64;
        let mut nanos = ((secs - whole) * 1e9).round() as u32;
        if nanos >= 1_000_000_000 {
            secs_part += 1;
            nanos = 0;
        }

        DateTime::<Utc>::from_timestamp(secs_part, nanos).ok_or_else(|| {
            ConvertError::OutOfRange {
                target: TARGET,
                detail: format!("seconds {} exceed the representable range", secs),
            }
        })
    }
}
