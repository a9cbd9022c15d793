//! Join clauses

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How a joined table combines with the sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl Default for JoinKind {
    fn default() -> Self {
        JoinKind::Inner
    }
}

impl JoinKind {
    /// Uppercase SQL keyword form
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinKind::Inner => write!(f, "inner"),
            JoinKind::Left => write!(f, "left"),
            JoinKind::Right => write!(f, "right"),
            JoinKind::Full => write!(f, "full"),
        }
    }
}

/// Error when parsing a join kind string
#[derive(Debug, Clone)]
pub struct ParseJoinKindError {
    pub input: String,
}

impl fmt::Display for ParseJoinKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown join kind '{}'. Valid options: inner, left, right, full",
            self.input
        )
    }
}

impl std::error::Error for ParseJoinKindError {}

impl FromStr for JoinKind {
    type Err = ParseJoinKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inner" => Ok(JoinKind::Inner),
            "left" => Ok(JoinKind::Left),
            "right" => Ok(JoinKind::Right),
            "full" => Ok(JoinKind::Full),
            _ => Err(ParseJoinKindError {
                input: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for JoinKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        JoinKind::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for JoinKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// One JOIN clause
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Join {
    /// Target table name
    pub table: String,
    /// Full boolean join predicate, e.g. `a.id = b.a_id`; emitted verbatim
    pub on: String,
    #[serde(default)]
    pub kind: JoinKind,
}

impl Join {
    pub fn new(table: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            on: on.into(),
            kind: JoinKind::Inner,
        }
    }

    pub fn with_kind(mut self, kind: JoinKind) -> Self {
        self.kind = kind;
        self
    }
}
