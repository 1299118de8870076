// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rendering a [`Scope`] into SQL text with ordered binds.
//!
//! # Generated SQL
//!
//! ```sql
//! SELECT "id", "name" FROM "users" WHERE ("name" = $1) AND ("id" IN ($2, $3))
//! ORDER BY "id" DESC LIMIT 10 OFFSET 20
//!
//! SELECT COUNT(*) FROM "users" WHERE "age" >= $1
//!
//! DELETE FROM "users" WHERE "email" IS NULL
//!
//! UPDATE "users" SET "name" = $1 WHERE "id" = $2
//! ```
//!
//! `?` markers in clause text are replaced left to right. A
//! [`Value::List`] bind expands to one placeholder per element; an empty list
//! renders as `NULL`, so `IN (?)` with no elements matches nothing.

use thiserror::Error;

use crate::{Dialect, Scope, Value};

/// Rendering failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A clause has more `?` markers than binds.
    #[error("clause `{sql}` has {markers} placeholder(s) but {args} bind(s)")]
    BindMismatch {
        /// Offending clause text.
        sql:     String,
        /// Number of `?` markers.
        markers: usize,
        /// Number of binds supplied.
        args:    usize
    },

    /// `UPDATE` without any assignment.
    #[error("update has no assignments")]
    EmptyUpdate
}

/// SQL text with binds in placeholder order.
///
/// Binds never contain [`Value::List`] or [`Value::Null`]: lists are
/// flattened and `NULL` is written into the SQL text, so no executor has to
/// guess a type for an untyped null bind.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Rendered SQL.
    pub sql: String,

    /// Flattened binds.
    pub binds: Vec<Value>
}

/// Incremental writer that numbers placeholders across the whole statement.
struct Writer {
    dialect: Dialect,
    sql:     String,
    binds:   Vec<Value>
}

impl Writer {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            sql: String::new(),
            binds: Vec::new()
        }
    }

    fn push(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    fn push_bind(&mut self, value: Value) {
        match value {
            Value::Null => self.sql.push_str("NULL"),
            Value::List(items) if items.is_empty() => self.sql.push_str("NULL"),
            Value::List(items) => {
                for (i, item) in items.into_iter().enumerate() {
                    if i > 0 {
                        self.sql.push_str(", ");
                    }
                    self.push_bind(item);
                }
            }
            Value::Numeric(digits) => {
                self.binds.push(Value::Numeric(digits));
                let placeholder = self.dialect.numeric_placeholder(self.binds.len());
                self.sql.push_str(&placeholder);
            }
            value => {
                self.binds.push(value);
                let placeholder = self.dialect.placeholder(self.binds.len());
                self.sql.push_str(&placeholder);
            }
        }
    }

    /// Append clause text, substituting each `?` with the next bind.
    fn push_with_binds(&mut self, text: &str, args: &[Value]) -> Result<(), RenderError> {
        let markers = text.matches('?').count();
        if markers != args.len() {
            return Err(RenderError::BindMismatch {
                sql: text.to_string(),
                markers,
                args: args.len()
            });
        }

        let mut args = args.iter().cloned();
        for (i, part) in text.split('?').enumerate() {
            if i > 0
                && let Some(arg) = args.next()
            {
                self.push_bind(arg);
            }
            self.push(part);
        }
        Ok(())
    }

    fn push_where(&mut self, scope: &Scope) -> Result<(), RenderError> {
        for (i, clause) in scope.conditions.iter().enumerate() {
            self.push(if i == 0 { " WHERE " } else { " AND " });
            let sql = clause.sql(self.dialect);
            if scope.conditions.len() > 1 {
                self.push("(");
                self.push_with_binds(&sql, &clause.args)?;
                self.push(")");
            } else {
                self.push_with_binds(&sql, &clause.args)?;
            }
        }
        Ok(())
    }

    fn push_order(&mut self, scope: &Scope) {
        if scope.orders.is_empty() {
            return;
        }
        let terms: Vec<String> = scope.orders.iter().map(|o| o.sql(self.dialect)).collect();
        self.push(" ORDER BY ");
        self.push(&terms.join(", "));
    }

    fn push_pagination(&mut self, limit: Option<u64>, offset: Option<u64>) {
        match (limit, offset) {
            (Some(limit), Some(offset)) => self.push(&format!(" LIMIT {limit} OFFSET {offset}")),
            (Some(limit), None) => self.push(&format!(" LIMIT {limit}")),
            (None, Some(offset)) => match self.dialect.unbounded_limit() {
                Some(max) => self.push(&format!(" LIMIT {max} OFFSET {offset}")),
                None => self.push(&format!(" OFFSET {offset}"))
            },
            (None, None) => {}
        }
    }

    fn finish(self) -> Statement {
        Statement {
            sql:   self.sql,
            binds: self.binds
        }
    }
}

impl Statement {
    /// Render `SELECT <columns> FROM <table> ...`.
    ///
    /// `limit` overrides the scope's limit when set (used by `first`).
    pub fn select(
        scope: &Scope,
        columns: &[&str],
        limit: Option<u64>,
        dialect: Dialect
    ) -> Result<Self, RenderError> {
        let mut w = Writer::new(dialect);
        let columns = if columns.is_empty() {
            "*".to_string()
        } else {
            columns
                .iter()
                .map(|c| dialect.quote_ident(c))
                .collect::<Vec<_>>()
                .join(", ")
        };
        w.push(&format!(
            "SELECT {columns} FROM {}",
            dialect.quote_ident(scope.table)
        ));
        w.push_where(scope)?;
        w.push_order(scope);
        w.push_pagination(limit.or(scope.limit), scope.offset);
        Ok(w.finish())
    }

    /// Render `SELECT COUNT(*) FROM <table> ...`. Ordering and pagination
    /// are ignored.
    pub fn count(scope: &Scope, dialect: Dialect) -> Result<Self, RenderError> {
        let mut w = Writer::new(dialect);
        w.push(&format!(
            "SELECT COUNT(*) FROM {}",
            dialect.quote_ident(scope.table)
        ));
        w.push_where(scope)?;
        Ok(w.finish())
    }

    /// Render `DELETE FROM <table> ...`.
    pub fn delete(scope: &Scope, dialect: Dialect) -> Result<Self, RenderError> {
        let mut w = Writer::new(dialect);
        w.push(&format!("DELETE FROM {}", dialect.quote_ident(scope.table)));
        w.push_where(scope)?;
        Ok(w.finish())
    }

    /// Render `UPDATE <table> SET ... WHERE ...`.
    pub fn update(
        scope: &Scope,
        assignments: &[(&'static str, Value)],
        dialect: Dialect
    ) -> Result<Self, RenderError> {
        if assignments.is_empty() {
            return Err(RenderError::EmptyUpdate);
        }

        let mut w = Writer::new(dialect);
        w.push(&format!("UPDATE {} SET ", dialect.quote_ident(scope.table)));
        for (i, (column, value)) in assignments.iter().enumerate() {
            if i > 0 {
                w.push(", ");
            }
            w.push(&dialect.quote_ident(column));
            w.push(" = ");
            w.push_bind(value.clone());
        }
        w.push_where(scope)?;
        Ok(w.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Clause, Condition, Order, SortDirection};

    fn column(column: &'static str, condition: &'static str, args: Vec<Value>) -> Clause {
        Clause {
            condition: Condition::Column {
                column,
                condition
            },
            args
        }
    }

    fn scope() -> Scope {
        let mut scope = Scope::new("users");
        scope
            .conditions
            .push(column("name", "= ?", vec![Value::from("ann")]));
        scope.conditions.push(column(
            "id",
            "IN (?)",
            vec![Value::List(vec![Value::from(1), Value::from(2)])]
        ));
        scope
    }

    #[test]
    fn select_numbers_placeholders_across_clauses() {
        let mut scope = scope();
        scope.orders.push(Order::Column {
            column:    "id",
            direction: SortDirection::Desc
        });
        scope.limit = Some(10);
        scope.offset = Some(20);

        let stmt = Statement::select(&scope, &["id", "name"], None, Dialect::Postgres).unwrap();
        assert_eq!(
            stmt.sql,
            "SELECT \"id\", \"name\" FROM \"users\" WHERE (\"name\" = $1) AND (\"id\" IN ($2, \
             $3)) ORDER BY \"id\" DESC LIMIT 10 OFFSET 20"
        );
        assert_eq!(
            stmt.binds,
            vec![Value::from("ann"), Value::Int(1), Value::Int(2)]
        );
    }

    #[test]
    fn select_single_clause_is_not_parenthesized() {
        let mut scope = Scope::new("users");
        scope.conditions.push(column("age", ">= ?", vec![Value::from(18)]));
        let stmt = Statement::select(&scope, &[], None, Dialect::MySql).unwrap();
        assert_eq!(stmt.sql, "SELECT * FROM `users` WHERE `age` >= ?");
    }

    #[test]
    fn first_overrides_limit() {
        let mut scope = Scope::new("users");
        scope.limit = Some(50);
        let stmt = Statement::select(&scope, &["id"], Some(1), Dialect::Postgres).unwrap();
        assert_eq!(stmt.sql, "SELECT \"id\" FROM \"users\" LIMIT 1");
    }

    #[test]
    fn offset_without_limit_per_dialect() {
        let mut scope = Scope::new("t");
        scope.offset = Some(5);
        let pg = Statement::select(&scope, &[], None, Dialect::Postgres).unwrap();
        assert!(pg.sql.ends_with(" OFFSET 5"));
        assert!(!pg.sql.contains("LIMIT"));
        let lite = Statement::select(&scope, &[], None, Dialect::Sqlite).unwrap();
        assert!(lite.sql.ends_with(" LIMIT -1 OFFSET 5"));
    }

    #[test]
    fn empty_list_renders_null() {
        let mut scope = Scope::new("users");
        scope
            .conditions
            .push(column("id", "IN (?)", vec![Value::List(Vec::new())]));
        let stmt = Statement::count(&scope, Dialect::Postgres).unwrap();
        assert_eq!(stmt.sql, "SELECT COUNT(*) FROM \"users\" WHERE \"id\" IN (NULL)");
        assert!(stmt.binds.is_empty());
    }

    #[test]
    fn count_ignores_order_and_pagination() {
        let mut scope = scope();
        scope.limit = Some(3);
        scope.orders.push(Order::Raw("name".to_string()));
        let stmt = Statement::count(&scope, Dialect::Postgres).unwrap();
        assert!(!stmt.sql.contains("ORDER BY"));
        assert!(!stmt.sql.contains("LIMIT"));
    }

    #[test]
    fn delete_renders_where() {
        let mut scope = Scope::new("users");
        scope.conditions.push(column("email", "IS NULL", Vec::new()));
        let stmt = Statement::delete(&scope, Dialect::Postgres).unwrap();
        assert_eq!(stmt.sql, "DELETE FROM \"users\" WHERE \"email\" IS NULL");
    }

    #[test]
    fn update_binds_assignments_before_conditions() {
        let mut scope = Scope::new("users");
        scope.conditions.push(column("id", "= ?", vec![Value::from(7)]));
        let stmt = Statement::update(
            &scope,
            &[("name", Value::from("bob")), ("email", Value::Null)],
            Dialect::Postgres
        )
        .unwrap();
        assert_eq!(
            stmt.sql,
            "UPDATE \"users\" SET \"name\" = $1, \"email\" = NULL WHERE \"id\" = $2"
        );
        assert_eq!(stmt.binds, vec![Value::from("bob"), Value::Int(7)]);
    }

    #[test]
    fn wide_integers_are_cast_on_postgres() {
        let mut scope = Scope::new("ledger");
        scope
            .conditions
            .push(column("total", "> ?", vec![Value::from(u128::MAX)]));

        let pg = Statement::count(&scope, Dialect::Postgres).unwrap();
        assert_eq!(
            pg.sql,
            "SELECT COUNT(*) FROM \"ledger\" WHERE \"total\" > $1::numeric"
        );
        assert_eq!(pg.binds, vec![Value::Numeric(u128::MAX.to_string())]);

        let lite = Statement::count(&scope, Dialect::Sqlite).unwrap();
        assert!(lite.sql.ends_with("\"total\" > ?"));
    }

    #[test]
    fn update_without_assignments_fails() {
        let scope = Scope::new("users");
        assert_eq!(
            Statement::update(&scope, &[], Dialect::Postgres),
            Err(RenderError::EmptyUpdate)
        );
    }

    #[test]
    fn bind_mismatch_is_reported() {
        let mut scope = Scope::new("users");
        scope.conditions.push(Clause {
            condition: Condition::Raw("a = ? OR b = ?".to_string()),
            args:      vec![Value::from(1)]
        });
        let err = Statement::count(&scope, Dialect::Postgres).unwrap_err();
        assert!(matches!(
            err,
            RenderError::BindMismatch {
                markers: 2,
                args: 1,
                ..
            }
        ));
    }
}
