//! Dynamically typed field values and string-field validation

use super::catalog::ValidationError;
use crate::config::LengthRange;
use serde::{Deserialize, Serialize};

/// Named string fields, used in validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    AuthorName,
    MagazineName,
    MagazineCategory,
    ArticleTitle,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::AuthorName => "author name",
            Field::MagazineName => "magazine name",
            Field::MagazineCategory => "magazine category",
            Field::ArticleTitle => "article title",
        };
        f.write_str(name)
    }
}

/// A value offered to a string field
///
/// Constructors and setters accept anything convertible into a `FieldValue`,
/// so callers holding loosely typed input (parsed JSON, form data) can pass it
/// through and get the same validation as a plain `&str`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// The string payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the value's type
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::String(_) => "string",
            FieldValue::Array(_) => "array",
        }
    }

    /// Take the string payload or fail with `NotAString`
    pub(crate) fn into_string(self, field: Field) -> Result<String, ValidationError> {
        match self {
            FieldValue::String(s) => Ok(s),
            other => Err(ValidationError::NotAString {
                field,
                found: other.kind(),
            }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Int(n.into())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Float(n)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::Array(values.into_iter().map(Into::into).collect())
    }
}

/// Require a non-empty string
pub(crate) fn non_empty(field: Field, value: FieldValue) -> Result<String, ValidationError> {
    let s = value.into_string(field)?;
    if s.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(s)
}

/// Require a string whose character count lies within `range`
pub(crate) fn bounded(
    field: Field,
    value: FieldValue,
    range: LengthRange,
) -> Result<String, ValidationError> {
    let s = value.into_string(field)?;
    let len = s.chars().count();
    if !range.contains(len) {
        return Err(ValidationError::Length {
            field,
            min: range.min,
            max: range.max,
            len,
        });
    }
    Ok(s)
}
