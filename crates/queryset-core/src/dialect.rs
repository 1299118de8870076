// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL dialect differences that matter when rendering a [`Scope`].
//!
//! [`Scope`]: crate::Scope

/// SQL dialect of an [`Executor`](crate::Executor).
///
/// Controls placeholder syntax, identifier quoting and how a bare `OFFSET`
/// is spelled.
///
/// | Dialect | Placeholders | Identifiers | Offset without limit |
/// |---------|--------------|-------------|----------------------|
/// | PostgreSQL | `$1, $2, ...` | `"name"` | `OFFSET n` |
/// | MySQL | `?` | `` `name` `` | `LIMIT 18446744073709551615 OFFSET n` |
/// | SQLite | `?` | `"name"` | `LIMIT -1 OFFSET n` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// PostgreSQL.
    #[default]
    Postgres,

    /// MySQL / MariaDB.
    MySql,

    /// SQLite.
    Sqlite
}

impl Dialect {
    /// Placeholder for the bind at the given index (1-based).
    #[must_use]
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Self::Postgres => format!("${index}"),
            Self::MySql | Self::Sqlite => "?".to_string()
        }
    }

    /// Placeholder for a [`Value::Numeric`](crate::Value::Numeric) bind.
    ///
    /// The value travels as text; PostgreSQL needs an explicit cast to
    /// compare it with a numeric column, MySQL and SQLite convert it.
    #[must_use]
    pub fn numeric_placeholder(&self, index: usize) -> String {
        match self {
            Self::Postgres => format!("${index}::numeric"),
            Self::MySql | Self::Sqlite => "?".to_string()
        }
    }

    /// Quote an identifier, quoting each part of a dotted path separately.
    ///
    /// Embedded quote characters are doubled.
    #[must_use]
    pub fn quote_ident(&self, ident: &str) -> String {
        let quote = match self {
            Self::Postgres | Self::Sqlite => '"',
            Self::MySql => '`'
        };
        ident
            .split('.')
            .map(|part| {
                let escaped = part.replace(quote, &format!("{quote}{quote}"));
                format!("{quote}{escaped}{quote}")
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// `LIMIT` keyword used when only an offset was requested.
    ///
    /// Returns `None` when the dialect accepts a bare `OFFSET`.
    #[must_use]
    pub const fn unbounded_limit(&self) -> Option<&'static str> {
        match self {
            Self::Postgres => None,
            Self::MySql => Some("18446744073709551615"),
            Self::Sqlite => Some("-1")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        assert_eq!(Dialect::Postgres.placeholder(3), "$3");
        assert_eq!(Dialect::MySql.placeholder(3), "?");
        assert_eq!(Dialect::Sqlite.placeholder(1), "?");
    }

    #[test]
    fn numeric_placeholders() {
        assert_eq!(Dialect::Postgres.numeric_placeholder(2), "$2::numeric");
        assert_eq!(Dialect::MySql.numeric_placeholder(2), "?");
    }

    #[test]
    fn quoting_splits_schema() {
        assert_eq!(Dialect::Postgres.quote_ident("core.users"), "\"core\".\"users\"");
        assert_eq!(Dialect::MySql.quote_ident("order"), "`order`");
    }

    #[test]
    fn quoting_escapes_quotes() {
        assert_eq!(Dialect::Postgres.quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn default_is_postgres() {
        assert_eq!(Dialect::default(), Dialect::Postgres);
        assert!(Dialect::Postgres.unbounded_limit().is_none());
        assert_eq!(Dialect::Sqlite.unbounded_limit(), Some("-1"));
    }
}
