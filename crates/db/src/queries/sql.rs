// crates/db/src/queries/sql.rs
//! Pure SQL-fragment builders for the job queries.
//!
//! Each builder pairs every predicate with its bound value before any
//! placeholder is numbered, so `?N` in the SQL always refers to `values[N-1]`.

use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments};

use super::types::{JobFilter, JobUpdate};

/// A value bound to a numbered placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
}

/// `WHERE` predicates and their bound values, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    predicates: Vec<String>,
    values: Vec<SqlValue>,
}

impl WhereClause {
    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Render as ` WHERE p1 AND p2 ...`, or an empty string when unfiltered.
    pub fn to_sql(&self) -> String {
        if self.predicates.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.predicates.join(" AND "))
        }
    }
}

/// `SET` assignments and their bound values, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetClause {
    assignments: Vec<String>,
    values: Vec<SqlValue>,
}

impl SetClause {
    pub fn assignments(&self) -> &[String] {
        &self.assignments
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Placeholder number for the first value bound after the assignments.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    pub fn to_sql(&self) -> String {
        self.assignments.join(", ")
    }
}

enum Condition {
    Bound {
        render: fn(&str) -> String,
        value: SqlValue,
    },
    Fixed(&'static str),
}

/// Build the list-query predicates for `filter`.
///
/// `has_equity: Some(false)` adds nothing, same as `None`.
pub fn job_filter_clause(filter: &JobFilter) -> WhereClause {
    let mut conditions = Vec::new();

    if let Some(min) = filter.min_salary {
        conditions.push(Condition::Bound {
            render: |p| format!("j.salary >= {p}"),
            value: SqlValue::Int(min),
        });
    }

    if filter.has_equity == Some(true) {
        conditions.push(Condition::Fixed("CAST(j.equity AS REAL) > 0"));
    }

    // LIKE folds ASCII case itself; both sides stay unfolded so a
    // same-case substring always matches, whatever the script.
    if let Some(title) = &filter.title {
        conditions.push(Condition::Bound {
            render: |p| format!("j.title LIKE {p} ESCAPE '\\'"),
            value: SqlValue::Text(format!("%{}%", escape_like(title))),
        });
    }

    let mut clause = WhereClause::default();
    for condition in conditions {
        match condition {
            Condition::Bound { render, value } => {
                clause.values.push(value);
                let placeholder = format!("?{}", clause.values.len());
                clause.predicates.push(render(&placeholder));
            }
            Condition::Fixed(sql) => clause.predicates.push(sql.to_string()),
        }
    }
    clause
}

/// Build the `SET` list for a partial job update. Absent fields are skipped.
pub fn job_update_clause(update: &JobUpdate) -> SetClause {
    let present: Vec<(&str, SqlValue)> = [
        ("title", update.title.clone().map(SqlValue::Text)),
        ("salary", update.salary.map(SqlValue::Int)),
        ("equity", update.equity.clone().map(SqlValue::Text)),
    ]
    .into_iter()
    .filter_map(|(column, value)| value.map(|v| (column, v)))
    .collect();

    let assignments = present
        .iter()
        .enumerate()
        .map(|(i, (column, _))| format!("{column} = ?{}", i + 1))
        .collect();
    let values = present.into_iter().map(|(_, value)| value).collect();

    SetClause {
        assignments,
        values,
    }
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Bind `values` onto `query` in order.
pub(crate) fn bind_values<'q, O>(
    query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    values: &'q [SqlValue],
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    values.iter().fold(query, |q, value| match value {
        SqlValue::Int(n) => q.bind(*n),
        SqlValue::Text(s) => q.bind(s.as_str()),
    })
}
