// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use queryset_core::prelude::*;
//! ```

pub use crate::{
    Db, Dialect, Error, Executor, Field, FromRecord, Model, QueryResult, SortDirection,
    Statement, Value, async_trait
};
