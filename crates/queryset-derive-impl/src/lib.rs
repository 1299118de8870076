// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[queryset(...)]`
//!
//! ```rust,ignore
//! #[derive(QuerySet)]
//! #[queryset(
//!     table = "users",  // Optional: table name (default: snake-case struct name)
//!     updater = false   // Optional: skip {Struct}Updater (default: true)
//! )]
//! pub struct User { /* ... */ }
//! ```
//!
//! ## Field-Level `#[queryset(...)]`
//!
//! ```rust,ignore
//! pub struct User {
//!     pub id: i64,                       // eq/ne/in/not_in/lt/lte/gt/gte + ordering
//!
//!     #[queryset(column = "user_name")]  // Explicit column
//!     pub name: String,                  // eq/ne/in/not_in/like/not_like + ordering
//!
//!     pub email: Option<String>,         // ... + is_null/is_not_null
//!
//!     #[queryset(ordered)]               // Comparison filters on a custom type
//!     pub version: Version,
//!
//!     #[queryset(preload)]               // preload_posts() only
//!     pub posts: Vec<Post>,
//!
//!     #[queryset(skip)]                  // Nothing generated, not selected
//!     pub cache: Vec<u8>,
//! }
//! ```

mod queryset;
mod utils;

use proc_macro::TokenStream;

/// Derive macro generating a chainable QuerySet for a database struct.
///
/// # Overview
///
/// For `struct User` the macro generates `UserQuerySet<E>`, a query builder
/// generic over a `queryset_core::Executor`. Filter arguments keep the
/// static type of the field they filter on, so `age_gt("x")` does not
/// compile when `age` is an integer.
///
/// # Generated Methods
///
/// | Method | Applies to | Delegates to |
/// |--------|------------|--------------|
/// | `limit(n)`, `offset(n)` | struct | `Db::limit`, `Db::offset` |
/// | `all()`, `one()` | struct | `Db::find`, `Db::first` |
/// | `count()` | struct | `Db::count` |
/// | `delete()`, `delete_num()` | struct | `Db::delete` |
/// | `get_updater()` | struct | `{Struct}Updater::new` |
/// | `{f}_eq`, `{f}_ne` | columns | `Db::where_column` |
/// | `{f}_in`, `{f}_not_in` | columns | `Db::where_column` with a list |
/// | `{f}_lt`, `{f}_lte`, `{f}_gt`, `{f}_gte` | numeric, temporal, `ordered` | `Db::where_column` |
/// | `{f}_like`, `{f}_not_like` | `String` | `Db::where_column` |
/// | `{f}_is_null`, `{f}_is_not_null` | `Option<T>` | `Db::where_column` |
/// | `order_asc_by_{f}`, `order_desc_by_{f}` | columns | `Db::order_column` |
/// | `preload_{f}` | `preload` fields | `Db::preload` |
///
/// Chained methods consume the QuerySet and return a new one; terminal
/// methods are `async` and return `QueryResult<T, E::Error>`.
///
/// # Other Generated Items
///
/// - `User::query_set(executor)` entry point
/// - `UserUpdater<E>` with `set_{f}(value)`, `update()`, `update_num()`
/// - `UserDbSchema` with one `Field` constant per column
/// - `impl queryset_core::Model for User`
///
/// # Example
///
/// ```rust,ignore
/// use queryset_derive::QuerySet;
///
/// #[derive(QuerySet, sqlx::FromRow)]
/// #[queryset(table = "users")]
/// pub struct User {
///     pub id: i64,
///     pub name: String,
///     pub email: Option<String>,
/// }
///
/// let users = User::query_set(pool)
///     .name_like("a%".to_string())
///     .email_is_not_null()
///     .order_desc_by_id()
///     .limit(10)
///     .all()
///     .await?;
/// ```
///
/// # Field Types
///
/// Filter and setter arguments are converted with
/// `queryset_core::Value::from`. A field of a type without such a
/// conversion needs `impl From<MyType> for Value` or `#[queryset(skip)]`.
#[proc_macro_derive(QuerySet, attributes(queryset))]
pub fn derive_queryset(input: TokenStream) -> TokenStream {
    queryset::derive(input)
}
