//! Filter predicates
//!
//! Right-hand text is stored and later emitted unescaped: the translation
//! service is trusted to produce safe literals, and escaping here would
//! change output for existing inputs containing quotes.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Right-hand operand as produced by the translation service
///
/// Replies carry the value either as JSON text or as a bare number.
/// Rendering always works on text, so `into_text` is the single
/// normalization point.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(serde_json::Number),
    Text(String),
}

impl ScalarValue {
    /// Reduce to the renderer's text form. Numbers keep their decimal
    /// notation; text passes through unchanged.
    pub fn into_text(self) -> String {
        match self {
            ScalarValue::Number(n) => n.to_string(),
            ScalarValue::Text(s) => s,
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Number(value.into())
    }
}

/// A single WHERE or HAVING predicate, conjunctive with its siblings
///
/// `left` is an expression (column reference or aggregate), `op` an operator
/// token kept verbatim, `right` the operand already reduced to text.
#[derive(Debug, Clone, Serialize)]
pub struct Condition {
    left: String,
    op: String,
    right: String,
}

impl Condition {
    /// Build a predicate. An empty left-hand expression is a contract
    /// violation by the producer and is rejected outright.
    pub fn new(
        left: impl Into<String>,
        op: impl Into<String>,
        right: impl Into<ScalarValue>,
    ) -> Result<Self, ConditionError> {
        let left = left.into();
        if left.is_empty() {
            return Err(ConditionError::EmptyLeft);
        }
        Ok(Self {
            left,
            op: op.into(),
            right: right.into().into_text(),
        })
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn op(&self) -> &str {
        &self.op
    }

    pub fn right(&self) -> &str {
        &self.right
    }
}

// Deserialization enforces the same construction invariant as `new`.
impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            left: String,
            op: String,
            right: ScalarValue,
        }

        let raw = Raw::deserialize(deserializer)?;
        Condition::new(raw.left, raw.op, raw.right).map_err(serde::de::Error::custom)
    }
}

/// Hard error from predicate construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// The left-hand expression was empty
    EmptyLeft,
}

impl fmt::Display for ConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionError::EmptyLeft => {
                write!(f, "condition left-hand expression must not be empty")
            }
        }
    }
}

impl std::error::Error for ConditionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_left_is_rejected() {
        assert_eq!(
            Condition::new("", "=", "1").unwrap_err(),
            ConditionError::EmptyLeft
        );
    }

    #[test]
    fn test_text_right_passes_through() {
        let cond = Condition::new("status", "=", "'paid'").unwrap();
        assert_eq!(cond.right(), "'paid'");
    }

    #[test]
    fn test_numeric_right_becomes_decimal_text() {
        let cond = Condition::new("amount", ">", 100).unwrap();
        assert_eq!(cond.right(), "100");

        let half = ScalarValue::Number(serde_json::Number::from_f64(2.5).unwrap());
        let cond = Condition::new("ratio", "<", half).unwrap();
        assert_eq!(cond.right(), "2.5");

        // A whole-number float keeps its fractional notation
        let whole = ScalarValue::Number(serde_json::Number::from_f64(57.0).unwrap());
        let cond = Condition::new("bps", ">=", whole).unwrap();
        assert_eq!(cond.right(), "57.0");
    }

    #[test]
    fn test_deserialize_with_number_right() {
        let cond: Condition = serde_json::from_str(r#"{"left": "id", "op": "=", "right": 7}"#).unwrap();
        assert_eq!(cond.left(), "id");
        assert_eq!(cond.right(), "7");
    }

    #[test]
    fn test_deserialize_rejects_empty_left() {
        let result: Result<Condition, _> =
            serde_json::from_str(r#"{"left": "", "op": "=", "right": "1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_operator_kept_verbatim() {
        let cond = Condition::new("name", " Like ", "'%a%'").unwrap();
        assert_eq!(cond.op(), " Like ");
    }
}
