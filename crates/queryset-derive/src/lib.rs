// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # queryset-derive
//!
//! One crate, all features. Re-exports:
//! - [`QuerySet`] derive macro from `queryset-derive-impl`
//! - All types from `queryset-core` ([`Db`], [`Executor`], [`Value`],
//!   [`Error`], [`Model`], [`Field`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use queryset_derive::QuerySet;
//!
//! #[derive(QuerySet, sqlx::FromRow)]
//! #[queryset(table = "users")]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//!     pub email: Option<String>,
//! }
//!
//! let count = User::query_set(pool)
//!     .email_is_null()
//!     .count()
//!     .await?;
//! ```

pub use queryset_core::*;
pub use queryset_derive_impl::QuerySet;
