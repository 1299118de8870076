// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming rules for generated methods, arguments and columns.
//!
//! # Lookup Tables
//!
//! | Table | Used by |
//! |-------|---------|
//! | [`COMMON_INITIALISMS`] | [`to_db_name`], [`field_name_to_arg_name`] |
//! | [`RUST_KEYWORDS`] | [`field_name_to_arg_name`] |
//! | [`where_condition`] | binary filter bodies |
//!
//! [`column_const_name`] names the `{Struct}DbSchema` constants.
//!
//! # Examples
//!
//! | Input | `to_db_name` | `field_name_to_arg_name` |
//! |-------|--------------|--------------------------|
//! | `name` | `name` | `name` |
//! | `UserID` | `user_id` | `user_id` |
//! | `HTTPServer` | `http_server` | `http_server` |
//! | `ID` | `id` | `id` |
//! | `type` | `type` | `type_value` |

use convert_case::{Case, Casing};

/// Common initialisms, kept together when splitting identifiers into words.
///
/// Only entries that are highly unlikely to be non-initialisms belong here.
/// `ID` is fine, `AND` is not.
pub const COMMON_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS"
];

/// Strict, reserved and weak keywords of Rust 2024.
///
/// An argument named after one of these gets a `_value` suffix.
pub const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "union", "unsafe", "unsized", "use", "virtual", "where", "while", "yield"
];

/// Check if a name is a common initialism.
#[must_use]
pub fn is_initialism(name: &str) -> bool {
    COMMON_INITIALISMS.contains(&name)
}

/// Check if a name is a Rust keyword.
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Strip the `r#` prefix of a raw identifier.
#[must_use]
pub fn unraw(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}

/// Title-case initialism runs so case conversion keeps them as one word.
///
/// `UserID` becomes `UserId`, `HTTPServer` becomes `HttpServer`. Longer
/// initialisms are tried first so `UUID` is not split as `U` + `UID`. A run
/// only matches at a word boundary: followed by end of input, an uppercase
/// letter that starts the next word, a digit or `_`.
fn titlecase_initialisms(name: &str) -> String {
    let mut initialisms: Vec<&str> = COMMON_INITIALISMS.to_vec();
    initialisms.sort_by_key(|s| std::cmp::Reverse(s.len()));

    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    'outer: while i < chars.len() {
        let word_start = i == 0 || !chars[i - 1].is_ascii_uppercase();
        if word_start {
            for initialism in &initialisms {
                let len = initialism.chars().count();
                if i + len > chars.len() {
                    continue;
                }
                let candidate: String = chars[i..i + len].iter().collect();
                if candidate != *initialism {
                    continue;
                }
                let boundary = match chars.get(i + len) {
                    None => true,
                    Some(next) => {
                        *next == '_'
                            || next.is_ascii_digit()
                            || (next.is_ascii_uppercase()
                                && chars.get(i + len + 1).is_none_or(|c| c.is_ascii_lowercase()))
                    }
                };
                if boundary {
                    let mut word = initialism.chars();
                    if let Some(first) = word.next() {
                        out.push(first);
                        out.extend(word.map(|c| c.to_ascii_lowercase()));
                    }
                    i += len;
                    continue 'outer;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Convert a struct or field name to its default database name.
///
/// Already-snake names are returned unchanged.
#[must_use]
pub fn to_db_name(name: &str) -> String {
    let name = unraw(name);
    if name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return name.to_string();
    }
    titlecase_initialisms(name).to_case(Case::Snake)
}

/// Convert a field name to the argument name used in generated methods.
///
/// An initialism field is lower-cased as one word, other names are
/// snake-cased, and a keyword result gets a `_value` suffix.
#[must_use]
pub fn field_name_to_arg_name(name: &str) -> String {
    let name = unraw(name);
    let arg = if is_initialism(name) {
        name.to_ascii_lowercase()
    } else {
        to_db_name(name)
    };
    if is_keyword(&arg) {
        format!("{arg}_value")
    } else {
        arg
    }
}

/// Compose a method name from an operation and a field.
///
/// Filters put the field first (`name_eq`); ordering and preload put the
/// operation first (`order_asc_by_name`, `preload_posts`).
#[must_use]
pub fn method_name(operation: &str, field: &str, field_first: bool) -> String {
    let field = to_db_name(field);
    if field_first {
        format!("{field}_{operation}")
    } else {
        format!("{operation}_{field}")
    }
}

/// SQL condition following the column for a binary filter operation.
///
/// Returns `None` for operations without a binary form.
#[must_use]
pub fn where_condition(operation: &str) -> Option<&'static str> {
    Some(match operation {
        "eq" => "= ?",
        "ne" => "!= ?",
        "lt" => "< ?",
        "lte" => "<= ?",
        "gt" => "> ?",
        "gte" => ">= ?",
        "like" => "LIKE ?",
        "not_like" => "NOT LIKE ?",
        _ => return None
    })
}

/// Constant name for a column: `created_at` becomes `CREATED_AT`.
///
/// Characters that cannot appear in an identifier (e.g. the `.` of a
/// qualified column) become `_`.
#[must_use]
pub fn column_const_name(column: &str) -> String {
    let name: String = column
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) || name.is_empty() {
        format!("_{name}")
    } else {
        name
    }
}
