//! URL binding
//!
//! `url::Url` lives in the Text category as its absolute-string form.
//! Reconstruction parses the stored text; malformed text is a typed,
//! recoverable failure.

use super::expect_text;
use crate::category::StorageCategory;
use crate::convert::ColumnConvert;
use crate::error::{ConvertError, Result};
use crate::value::ColumnValue;
use url::Url;

impl ColumnConvert for Url {
    const CATEGORY: StorageCategory = StorageCategory::Text;

    fn to_column(&self) -> ColumnValue {
        ColumnValue::Text(self.as_str().to_string())
    }

    fn from_column(value: ColumnValue) -> Result<Self> {
        let text = expect_text("Url", value)?;
        Url::parse(&text).map_err(|_| ConvertError::MalformedText {
            target: "Url",
            text,
        })
    }
}
