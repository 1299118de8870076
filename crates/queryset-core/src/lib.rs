// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core query API for queryset-derive.
//!
//! This crate provides the chainable handle and executor traits that
//! `#[derive(QuerySet)]` generated code delegates to. It can also be used
//! standalone to build scoped queries by hand.
//!
//! # Overview
//!
//! - [`Db`] — Chainable handle: `where_`, `order`, `preload`, `limit`,
//!   `offset`, then `find`, `first`, `count`, `delete`, `updates`
//! - [`Scope`] — Accumulated clauses for one table
//! - [`Statement`] — SQL rendering with dialect-specific placeholders
//! - [`Executor`] — Backend that runs statements
//! - [`Model`] / [`Field`] — Table metadata emitted by the derive
//! - [`Value`] — Bind values
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `queryset-derive` directly, which re-exports this
//! crate:
//!
//! ```rust,ignore
//! use queryset_derive::QuerySet;
//!
//! #[derive(QuerySet, sqlx::FromRow)]
//! #[queryset(table = "users")]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! let users = User::query_set(pool)
//!     .name_eq("ann".to_string())
//!     .order_desc_by_id()
//!     .limit(10)
//!     .all()
//!     .await?;
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod db;
mod dialect;
mod error;
mod executor;
mod model;
#[cfg(feature = "postgres")]
mod postgres;
pub mod prelude;
mod scope;
mod statement;
mod value;

/// Re-export async_trait for executor implementations.
pub use async_trait::async_trait;
pub use db::Db;
pub use dialect::Dialect;
pub use error::{DecodeError, Error, QueryResult};
pub use executor::{Executor, FromRecord};
pub use model::{Field, Model};
pub use scope::{Clause, Condition, Order, Scope, SortDirection};
pub use statement::{RenderError, Statement};
pub use value::Value;
