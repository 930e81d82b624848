//! Raw numeric field input.
//!
//! Operators type into numeric fields one keystroke at a time, so a field can
//! legitimately be blank or hold text that is not (yet) a number. Instead of
//! letting such text leak through as NaN, every numeric field is one of three
//! explicit states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric clip parameter as the operator entered it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawNumber", into = "RawNumber")]
pub enum NumericField {
    /// Nothing entered.
    #[default]
    Unset,
    /// Text that does not parse as a finite number. Kept verbatim.
    Invalid(String),
    /// A finite number, with the text it was entered as.
    Value { value: f64, raw: String },
}

impl NumericField {
    /// Parse raw field text. Surrounding whitespace is ignored when
    /// classifying; the text itself is kept as entered.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Value {
                value,
                raw: raw.to_string(),
            },
            _ => Self::Invalid(raw.to_string()),
        }
    }

    pub fn from_number(v: f64) -> Self {
        if v.is_finite() {
            Self::Value {
                value: v,
                raw: v.to_string(),
            }
        } else {
            Self::Invalid(v.to_string())
        }
    }

    /// The parsed value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// The field exactly as entered. Empty when unset.
    pub fn raw(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::Invalid(raw) | Self::Value { raw, .. } => raw,
        }
    }

    /// Whether the operator entered anything at all (valid or not).
    pub fn is_filled(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Integer reading of the field, truncated toward zero.
    pub fn integer(&self) -> Option<f64> {
        self.value().map(f64::trunc)
    }

    /// Integer reading with blank and invalid input treated as zero.
    pub fn integer_or_zero(&self) -> f64 {
        self.integer().unwrap_or(0.0)
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

impl From<f64> for NumericField {
    fn from(v: f64) -> Self {
        Self::from_number(v)
    }
}

impl From<&str> for NumericField {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Wire shape: JSON number, string, or null.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Null(()),
}

impl From<RawNumber> for NumericField {
    fn from(raw: RawNumber) -> Self {
        match raw {
            RawNumber::Number(v) => Self::from_number(v),
            RawNumber::Text(s) => Self::parse(&s),
            RawNumber::Null(()) => Self::Unset,
        }
    }
}

impl From<NumericField> for RawNumber {
    fn from(field: NumericField) -> Self {
        match field {
            NumericField::Unset => RawNumber::Text(String::new()),
            NumericField::Invalid(raw) => RawNumber::Text(raw),
            // Text that reads back as the same number is written as a number.
            NumericField::Value { value, raw } if raw == value.to_string() => {
                RawNumber::Number(value)
            }
            NumericField::Value { raw, .. } => RawNumber::Text(raw),
        }
    }
}
