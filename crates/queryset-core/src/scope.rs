// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Accumulated query state.
//!
//! A [`Scope`] is what every chained QuerySet call appends to: `WHERE`
//! clauses, `ORDER BY` terms, relations to preload and pagination. It holds
//! no connection and renders nothing by itself; see
//! [`Statement`](crate::Statement) for rendering.

use crate::{Dialect, Value};

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Asc,

    /// Descending order (Z-A, 9-0, newest first).
    Desc
}

impl SortDirection {
    /// Convert to SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC"
        }
    }
}

/// Left-hand side of a `WHERE` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// SQL fragment used verbatim. `?` marks a bind.
    Raw(String),

    /// Column condition. The column is quoted for the executor's dialect
    /// when rendered, e.g. `("name", "= ?")` becomes `"name" = $1`.
    Column {
        /// Database column name.
        column:    &'static str,
        /// Condition following the column, e.g. `"= ?"` or `"IS NULL"`.
        condition: &'static str
    }
}

/// One `WHERE` clause with its binds.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Condition text.
    pub condition: Condition,

    /// Values for the `?` markers, in order.
    pub args: Vec<Value>
}

impl Clause {
    /// Render the condition text for a dialect, leaving `?` markers intact.
    #[must_use]
    pub fn sql(&self, dialect: Dialect) -> String {
        match &self.condition {
            Condition::Raw(sql) => sql.clone(),
            Condition::Column {
                column,
                condition
            } => format!("{} {}", dialect.quote_ident(column), condition)
        }
    }
}

/// One `ORDER BY` term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Order {
    /// SQL fragment used verbatim.
    Raw(String),

    /// Quoted column with direction.
    Column {
        /// Database column name.
        column:    &'static str,
        /// Sort direction.
        direction: SortDirection
    }
}

impl Order {
    /// Render the term for a dialect.
    #[must_use]
    pub fn sql(&self, dialect: Dialect) -> String {
        match self {
            Self::Raw(sql) => sql.clone(),
            Self::Column {
                column,
                direction
            } => format!("{} {}", dialect.quote_ident(column), direction.as_sql())
        }
    }
}

/// Query state for one table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scope {
    /// Target table, optionally schema-qualified.
    pub table: &'static str,

    /// `WHERE` clauses, joined with `AND`.
    pub conditions: Vec<Clause>,

    /// `ORDER BY` terms in call order.
    pub orders: Vec<Order>,

    /// Relations to load after the main query.
    pub preloads: Vec<&'static str>,

    /// Maximum number of rows.
    pub limit: Option<u64>,

    /// Number of rows to skip.
    pub offset: Option<u64>
}

impl Scope {
    /// Create an empty scope for a table.
    #[must_use]
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    /// Check if the scope narrows the table at all.
    ///
    /// Used to warn before table-wide `UPDATE` and `DELETE`.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.conditions.is_empty()
    }
}
