// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL executor over `sqlx::PgPool`.
//!
//! Enabled with the `postgres` feature. Models are decoded through
//! `sqlx::FromRow`, so deriving `sqlx::FromRow` next to `QuerySet` is enough:
//!
//! ```rust,ignore
//! #[derive(QuerySet, sqlx::FromRow)]
//! #[queryset(table = "users")]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! let users = User::query_set(pool.clone()).name_eq("ann".into()).all().await?;
//! ```
//!
//! Preloading relations is not supported by this executor.

use async_trait::async_trait;
use sqlx::{
    PgPool, Postgres, Row,
    postgres::{PgArguments, PgRow},
    query::Query
};

use crate::{DecodeError, Dialect, Executor, FromRecord, Statement, Value};

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &Value
) -> Result<Query<'q, Postgres, PgArguments>, sqlx::Error> {
    Ok(match value {
        Value::Null => {
            return Err(sqlx::Error::Protocol(
                "NULL must be rendered inline, not bound".to_string()
            ));
        }
        Value::Bool(v) => query.bind(*v),
        Value::Int(v) => query.bind(*v),
        Value::UInt(v) => {
            let v = i64::try_from(*v).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
            query.bind(v)
        }
        Value::Float(v) => query.bind(*v),
        Value::Text(v) => query.bind(v.clone()),
        Value::Numeric(v) => query.bind(v.clone()),
        Value::Bytes(v) => query.bind(v.clone()),
        Value::List(_) => {
            return Err(sqlx::Error::Protocol(
                "list binds must be flattened before execution".to_string()
            ));
        }
        #[cfg(feature = "uuid")]
        Value::Uuid(v) => query.bind(*v),
        #[cfg(feature = "chrono")]
        Value::Timestamp(v) => query.bind(*v),
        #[cfg(feature = "chrono")]
        Value::NaiveTimestamp(v) => query.bind(*v),
        #[cfg(feature = "chrono")]
        Value::Date(v) => query.bind(*v),
        #[cfg(feature = "chrono")]
        Value::Time(v) => query.bind(*v),
        #[cfg(feature = "time")]
        Value::OffsetDateTime(v) => query.bind(*v),
        #[cfg(feature = "time")]
        Value::PrimitiveDateTime(v) => query.bind(*v),
        #[cfg(feature = "time")]
        Value::TimeDate(v) => query.bind(*v),
        #[cfg(feature = "time")]
        Value::TimeOfDay(v) => query.bind(*v),
        #[cfg(feature = "rust_decimal")]
        Value::Decimal(v) => query.bind(*v)
    })
}

fn build(statement: &Statement) -> Result<Query<'_, Postgres, PgArguments>, sqlx::Error> {
    statement
        .binds
        .iter()
        .try_fold(sqlx::query(&statement.sql), bind_value)
}

#[async_trait]
impl Executor for PgPool {
    type Error = sqlx::Error;
    type Row = PgRow;

    const DIALECT: Dialect = Dialect::Postgres;

    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<PgRow>, sqlx::Error> {
        build(statement)?.fetch_all(self).await
    }

    async fn fetch_count(&self, statement: &Statement) -> Result<u64, sqlx::Error> {
        let row = build(statement)?.fetch_one(self).await?;
        let count: i64 = row.try_get(0)?;
        u64::try_from(count).map_err(|e| sqlx::Error::Decode(Box::new(e)))
    }

    async fn execute(&self, statement: &Statement) -> Result<u64, sqlx::Error> {
        let result = build(statement)?.execute(self).await?;
        Ok(result.rows_affected())
    }
}

impl<T> FromRecord<PgRow> for T
where
    T: for<'r> sqlx::FromRow<'r, PgRow>
{
    fn from_record(row: &PgRow) -> Result<Self, DecodeError> {
        T::from_row(row).map_err(DecodeError::new)
    }
}
