//! Select-list column references

use serde::{Deserialize, Serialize};

/// One select-list item
///
/// `column` may be a bare column name or a full expression such as
/// `count(*)` or `sum(amount)`. The renderer only identifier-quotes it when
/// a table qualifier is present; unqualified expressions are emitted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Optional table qualifier
    #[serde(default)]
    pub table: Option<String>,
    /// Column name or expression
    pub column: String,
    /// Optional output alias
    #[serde(default)]
    pub alias: Option<String>,
}

impl ColumnRef {
    /// Unqualified column or expression
    pub fn expression(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: column.into(),
            alias: None,
        }
    }

    /// Table-qualified column
    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: column.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
