//! MySQL statement renderer
//!
//! Fixed clause order, backtick identifier quoting, clauses omitted when
//! their source list is absent or empty. Condition text is emitted
//! unescaped; the producer is trusted to supply safe literals.

use crate::query::{ColumnRef, Condition, SelectQuery};

/// Render a normalized query as a single MySQL statement.
///
/// Rendering is total and deterministic: no I/O, no failure path, and the
/// same input always yields byte-identical output.
pub fn render_sql(query: &SelectQuery) -> String {
    let select_sql = if query.select.is_empty() {
        "*".to_string()
    } else {
        query
            .select
            .iter()
            .map(render_column)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let from_sql = query
        .from_
        .iter()
        .map(|table| quote_identifier(table))
        .collect::<Vec<_>>()
        .join(", ");

    let mut sql = format!("SELECT {} FROM {}", select_sql, from_sql);

    if let Some(joins) = &query.joins {
        for join in joins {
            sql.push_str(&format!(
                " {} JOIN {} ON {}",
                join.kind.sql_keyword(),
                quote_identifier(&join.table),
                join.on
            ));
        }
    }

    if let Some(conditions) = non_empty(&query.where_) {
        sql.push_str(" WHERE ");
        sql.push_str(&join_conditions(conditions));
    }

    if let Some(expressions) = non_empty(&query.group_by) {
        sql.push_str(" GROUP BY ");
        sql.push_str(&expressions.join(", "));
    }

    if let Some(conditions) = non_empty(&query.having) {
        sql.push_str(" HAVING ");
        sql.push_str(&join_conditions(conditions));
    }

    if let Some(items) = non_empty(&query.order_by) {
        let keys: Vec<String> = items
            .iter()
            .map(|item| format!("{} {}", item.by, item.direction.sql_keyword()))
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&keys.join(", "));
    }

    if let Some(limit) = query.limit {
        sql.push_str(&format!(" LIMIT {}", limit));
    }

    sql
}

/// Merge a rendered semantic statement with the statement that materializes
/// its source. Targets with CTE support get a WITH prefix; everything else
/// falls back to plain concatenation.
pub fn with_physical_source(
    semantic_sql: &str,
    source_name: &str,
    source_sql: &str,
    supports_with: bool,
) -> String {
    if supports_with {
        format!(
            "WITH `{}` AS (\n    {}\n)\n {}",
            source_name, source_sql, semantic_sql
        )
    } else {
        format!("{} {}", semantic_sql, source_sql)
    }
}

fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|items| !items.is_empty())
}

fn join_conditions(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(render_condition)
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn render_column(column: &ColumnRef) -> String {
    let expr = match &column.table {
        None => column.column.clone(),
        Some(table) => format!(
            "{}.{}",
            quote_identifier(table),
            quote_identifier(&column.column)
        ),
    };
    match &column.alias {
        Some(alias) => format!("{} AS {}", expr, quote_identifier(alias)),
        None => expr,
    }
}

/// Wrap an identifier in backticks. Dotted names are quoted component-wise
/// and `*` is never quoted.
fn quote_identifier(name: &str) -> String {
    if name.trim() == "*" {
        return name.to_string();
    }
    if name.contains('.') {
        name.split('.')
            .map(|part| {
                if part == "*" {
                    part.to_string()
                } else {
                    format!("`{}`", part)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    } else {
        format!("`{}`", name)
    }
}

/// Special-cased operator handling, matched on the trimmed lowercase token;
/// anything else is emitted verbatim between its operands.
fn render_condition(condition: &Condition) -> String {
    match condition.op().trim().to_lowercase().as_str() {
        "in" => format!("{} IN ({})", condition.left(), condition.right()),
        "between" => format!("{} BETWEEN {}", condition.left(), condition.right()),
        "like" => format!("{} LIKE {}", condition.left(), condition.right()),
        _ => format!(
            "{} {} {}",
            condition.left(),
            condition.op(),
            condition.right()
        ),
    }
}
