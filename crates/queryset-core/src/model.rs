// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table metadata implemented by `#[derive(QuerySet)]`.

use std::fmt;

/// Table metadata for a struct with a generated QuerySet.
///
/// # Example
///
/// ```rust
/// use queryset_core::Model;
///
/// struct User;
///
/// impl Model for User {
///     const TABLE: &'static str = "users";
///     const COLUMNS: &'static [&'static str] = &["id", "name"];
/// }
///
/// assert_eq!(User::TABLE, "users");
/// ```
pub trait Model {
    /// Table name, optionally schema-qualified.
    const TABLE: &'static str;

    /// Selected columns, in field declaration order.
    const COLUMNS: &'static [&'static str];
}

/// Name of one database column.
///
/// Generated `{Struct}DbSchema` types expose one constant per column so
/// callers can refer to columns without string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field(&'static str);

impl Field {
    /// Create a field from its column name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Column name.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for Field {
    fn as_ref(&self) -> &str {
        self.0
    }
}
