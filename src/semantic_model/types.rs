//! Data type tags for semantic fields

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Data type of a semantic field
///
/// These are business-facing tags, not physical column types: they tell the
/// translation step what kind of value a field holds so it can pick sensible
/// aggregations, filters and date functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Short character data
    String,
    /// Whole numbers
    Integer,
    /// Floating-point numbers
    Float,
    /// True/false flags
    Boolean,
    /// Calendar dates
    Date,
    /// Date plus time of day
    DateTime,
    /// Long-form character data
    Text,
    /// Fixed-point amounts (prices, totals)
    Decimal,
    /// Structured JSON documents
    Json,
}

impl Default for DataType {
    fn default() -> Self {
        DataType::String
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => write!(f, "string"),
            DataType::Integer => write!(f, "integer"),
            DataType::Float => write!(f, "float"),
            DataType::Boolean => write!(f, "boolean"),
            DataType::Date => write!(f, "date"),
            DataType::DateTime => write!(f, "datetime"),
            DataType::Text => write!(f, "text"),
            DataType::Decimal => write!(f, "decimal"),
            DataType::Json => write!(f, "json"),
        }
    }
}

/// Error when parsing a data type string
#[derive(Debug, Clone)]
pub struct ParseDataTypeError {
    pub input: String,
}

impl fmt::Display for ParseDataTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown data type '{}'. Valid options: string, integer, float, boolean, date, datetime, text, decimal, json",
            self.input
        )
    }
}

impl std::error::Error for ParseDataTypeError {}

impl FromStr for DataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" | "varchar" => Ok(DataType::String),
            "integer" | "int" | "bigint" => Ok(DataType::Integer),
            "float" | "double" => Ok(DataType::Float),
            "boolean" | "bool" => Ok(DataType::Boolean),
            "date" => Ok(DataType::Date),
            "datetime" | "timestamp" => Ok(DataType::DateTime),
            "text" | "longtext" => Ok(DataType::Text),
            "decimal" | "numeric" => Ok(DataType::Decimal),
            "json" => Ok(DataType::Json),
            _ => Err(ParseDataTypeError {
                input: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DataType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
