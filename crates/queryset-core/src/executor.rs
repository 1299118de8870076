// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Backend abstraction that runs rendered statements.
//!
//! Generated QuerySets are generic over an [`Executor`]. The `postgres`
//! feature implements it for `sqlx::PgPool`; tests and other backends can
//! implement it directly.
//!
//! # Example
//!
//! ```rust,ignore
//! #[async_trait]
//! impl Executor for MyConnection {
//!     type Error = MyError;
//!     type Row = MyRow;
//!
//!     const DIALECT: Dialect = Dialect::Sqlite;
//!
//!     async fn fetch_all(&self, statement: &Statement) -> Result<Vec<MyRow>, MyError> { ... }
//!     async fn fetch_count(&self, statement: &Statement) -> Result<u64, MyError> { ... }
//!     async fn execute(&self, statement: &Statement) -> Result<u64, MyError> { ... }
//! }
//! ```

use async_trait::async_trait;

use crate::{DecodeError, Dialect, Error, Statement};

/// Runs statements rendered from a QuerySet scope.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Backend error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Row type produced by [`fetch_all`](Self::fetch_all).
    type Row: Send;

    /// Dialect used to render statements for this executor.
    const DIALECT: Dialect;

    /// Run a `SELECT` and return all rows.
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Self::Row>, Self::Error>;

    /// Run a `SELECT COUNT(*)` and return the count.
    async fn fetch_count(&self, statement: &Statement) -> Result<u64, Self::Error>;

    /// Run a `DELETE` or `UPDATE` and return the number of affected rows.
    async fn execute(&self, statement: &Statement) -> Result<u64, Self::Error>;

    /// Load a relation into already fetched models.
    ///
    /// Called once per preloaded relation, in preload order. The default
    /// implementation reports the relation as unsupported.
    async fn preload<T>(&self, models: &mut [T], relation: &str) -> Result<(), Error<Self::Error>>
    where
        T: Send
    {
        let _ = models;
        Err(Error::UnsupportedPreload(relation.to_string()))
    }
}

/// Decode a backend row into a model.
pub trait FromRecord<R>: Sized {
    /// Build the model from one row.
    fn from_record(row: &R) -> Result<Self, DecodeError>;
}
