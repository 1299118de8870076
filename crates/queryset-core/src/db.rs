// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Chainable query handle.
//!
//! [`Db`] is the API generated QuerySet methods delegate to. Chain methods
//! consume the handle and return it with one more clause recorded; terminal
//! methods render the scope for the executor's dialect and run it.
//!
//! # Example
//!
//! ```rust,ignore
//! let adults: Vec<User> = Db::new(pool, "users")
//!     .where_column("age", ">= ?", vec![18.into()])
//!     .order_column("name", SortDirection::Asc)
//!     .limit(20)
//!     .find()
//!     .await?;
//! ```

use tracing::{debug, trace, warn};

use crate::{
    Clause, Condition, Error, Executor, FromRecord, Model, Order, QueryResult, Scope,
    SortDirection, Statement, Value
};

/// Executor plus accumulated scope.
#[derive(Debug, Clone)]
pub struct Db<E> {
    executor: E,
    scope:    Scope
}

impl<E> Db<E> {
    /// Create a handle over an executor for one table.
    pub fn new(executor: E, table: &'static str) -> Self {
        Self {
            executor,
            scope: Scope::new(table)
        }
    }

    /// Create a handle for a model's table.
    pub fn for_model<M: Model>(executor: E) -> Self {
        Self::new(executor, M::TABLE)
    }

    /// Add a raw `WHERE` clause. Each `?` consumes one value from `args`.
    #[must_use]
    pub fn where_(mut self, sql: impl Into<String>, args: Vec<Value>) -> Self {
        let sql = sql.into();
        trace!(%sql, args = args.len(), "where");
        self.scope.conditions.push(Clause {
            condition: Condition::Raw(sql),
            args
        });
        self
    }

    /// Add a `WHERE` clause on a column quoted for the executor's dialect.
    #[must_use]
    pub fn where_column(
        mut self,
        column: &'static str,
        condition: &'static str,
        args: Vec<Value>
    ) -> Self {
        trace!(column, condition, args = args.len(), "where column");
        self.scope.conditions.push(Clause {
            condition: Condition::Column {
                column,
                condition
            },
            args
        });
        self
    }

    /// Add a raw `ORDER BY` term.
    #[must_use]
    pub fn order(mut self, sql: impl Into<String>) -> Self {
        self.scope.orders.push(Order::Raw(sql.into()));
        self
    }

    /// Add an `ORDER BY` term on a quoted column.
    #[must_use]
    pub fn order_column(mut self, column: &'static str, direction: SortDirection) -> Self {
        trace!(column, direction = direction.as_sql(), "order");
        self.scope.orders.push(Order::Column {
            column,
            direction
        });
        self
    }

    /// Load a relation after the main query.
    ///
    /// Repeated calls for the same relation are recorded once.
    #[must_use]
    pub fn preload(mut self, relation: &'static str) -> Self {
        if !self.scope.preloads.contains(&relation) {
            self.scope.preloads.push(relation);
        }
        self
    }

    /// Limit the number of rows. The last call wins.
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.scope.limit = Some(limit);
        self
    }

    /// Skip rows. The last call wins.
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.scope.offset = Some(offset);
        self
    }

    /// Accumulated scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Split into executor and scope.
    pub fn into_parts(self) -> (E, Scope) {
        (self.executor, self.scope)
    }
}

impl<E: Executor> Db<E> {
    /// Fetch all matching rows, then load preloaded relations.
    pub async fn find<T>(self) -> QueryResult<Vec<T>, E::Error>
    where
        T: Model + FromRecord<E::Row> + Send
    {
        let statement = Statement::select(&self.scope, T::COLUMNS, None, E::DIALECT)?;
        self.fetch(statement).await
    }

    /// Fetch the first matching row.
    ///
    /// Returns [`Error::RecordNotFound`] when nothing matches.
    pub async fn first<T>(self) -> QueryResult<T, E::Error>
    where
        T: Model + FromRecord<E::Row> + Send
    {
        let statement = Statement::select(&self.scope, T::COLUMNS, Some(1), E::DIALECT)?;
        self.fetch(statement)
            .await?
            .into_iter()
            .next()
            .ok_or(Error::RecordNotFound)
    }

    /// Count matching rows.
    pub async fn count(self) -> QueryResult<u64, E::Error> {
        let statement = Statement::count(&self.scope, E::DIALECT)?;
        debug!(sql = %statement.sql, binds = statement.binds.len(), "count");
        self.executor
            .fetch_count(&statement)
            .await
            .map_err(Error::Backend)
    }

    /// Delete matching rows and return how many were removed.
    pub async fn delete(self) -> QueryResult<u64, E::Error> {
        let statement = Statement::delete(&self.scope, E::DIALECT)?;
        if self.scope.is_unfiltered() {
            warn!(table = self.scope.table, "delete without conditions affects every row");
        }
        debug!(sql = %statement.sql, binds = statement.binds.len(), "delete");
        self.executor
            .execute(&statement)
            .await
            .map_err(Error::Backend)
    }

    /// Assign columns on matching rows and return how many were updated.
    pub async fn updates(
        self,
        assignments: Vec<(&'static str, Value)>
    ) -> QueryResult<u64, E::Error> {
        let statement = Statement::update(&self.scope, &assignments, E::DIALECT)?;
        if self.scope.is_unfiltered() {
            warn!(table = self.scope.table, "update without conditions affects every row");
        }
        debug!(sql = %statement.sql, binds = statement.binds.len(), "update");
        self.executor
            .execute(&statement)
            .await
            .map_err(Error::Backend)
    }

    async fn fetch<T>(self, statement: Statement) -> QueryResult<Vec<T>, E::Error>
    where
        T: FromRecord<E::Row> + Send
    {
        debug!(sql = %statement.sql, binds = statement.binds.len(), "select");
        let rows = self
            .executor
            .fetch_all(&statement)
            .await
            .map_err(Error::Backend)?;
        let mut models = rows
            .iter()
            .map(T::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        if !models.is_empty() {
            for relation in self.scope.preloads.iter().copied() {
                debug!(relation, rows = models.len(), "preload");
                self.executor.preload(&mut models, relation).await?;
            }
        }
        Ok(models)
    }
}
