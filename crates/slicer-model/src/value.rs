use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared interpretation of a column's raw scalar values.
///
/// Supplied by host metadata per column; columns without a declared type are
/// treated as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataKind {
    Numeric,
    DateTime,
    #[default]
    Text,
}

impl DataKind {
    pub fn is_numeric(self) -> bool {
        self == DataKind::Numeric
    }

    pub fn is_date_time(self) -> bool {
        self == DataKind::DateTime
    }
}

/// A raw scalar after coercion against its declared [`DataKind`].
///
/// `Raw` carries a value left untouched: date-typed values on display-only
/// paths stay unparsed, and values the declared kind cannot absorb fall
/// through rather than fault.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
    Raw(Value),
}
