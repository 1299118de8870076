// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field type classification.
//!
//! The declared type decides which filter shapes make sense for a field:
//!
//! | Type | Nullable | Ordered | Textual |
//! |------|----------|---------|---------|
//! | `Option<T>` | yes | as `T` | as `T` |
//! | integers, floats, `Decimal` | | yes | |
//! | `chrono` / `time` date-time types, `SystemTime` | | yes | |
//! | `String` | | | yes |
//! | anything else | | | |

use syn::{GenericArgument, PathArguments, Type};

const NUMERIC: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
    "f64", "Decimal"
];

const TEMPORAL: &[&str] = &[
    "DateTime",
    "NaiveDate",
    "NaiveDateTime",
    "NaiveTime",
    "Date",
    "Time",
    "OffsetDateTime",
    "PrimitiveDateTime",
    "SystemTime"
];

const TEXTUAL: &[&str] = &["String"];

/// Classification of a field's declared type.
#[derive(Debug, Clone)]
pub struct FieldKind {
    /// Declared as `Option<T>`.
    pub nullable: bool,

    /// Supports `<`, `<=`, `>`, `>=`.
    pub ordered: bool,

    /// Supports `LIKE`.
    pub textual: bool,

    /// Type compared against: `T` for `Option<T>`, the declared type
    /// otherwise.
    pub value_ty: Type
}

/// Extract `T` from `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None
    }
}

/// Last path segment name of a type, e.g. `DateTime` for
/// `chrono::DateTime<Utc>`.
fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        Type::Group(group) => type_name(&group.elem),
        Type::Paren(paren) => type_name(&paren.elem),
        _ => None
    }
}

impl FieldKind {
    /// Classify a declared field type.
    #[must_use]
    pub fn of(ty: &Type) -> Self {
        let (nullable, value_ty) = match option_inner(ty) {
            Some(inner) => (true, inner.clone()),
            None => (false, ty.clone())
        };
        let name = type_name(&value_ty).unwrap_or_default();

        Self {
            nullable,
            ordered: NUMERIC.contains(&name.as_str()) || TEMPORAL.contains(&name.as_str()),
            textual: TEXTUAL.contains(&name.as_str()),
            value_ty
        }
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::parse_quote;

    use super::*;

    #[test]
    fn plain_integer() {
        let kind = FieldKind::of(&parse_quote!(i64));
        assert!(!kind.nullable);
        assert!(kind.ordered);
        assert!(!kind.textual);
    }

    #[test]
    fn optional_string() {
        let kind = FieldKind::of(&parse_quote!(Option<String>));
        assert!(kind.nullable);
        assert!(kind.textual);
        assert!(!kind.ordered);
        let value_ty = &kind.value_ty;
        assert_eq!(quote!(#value_ty).to_string(), "String");
    }

    #[test]
    fn qualified_datetime() {
        let kind = FieldKind::of(&parse_quote!(chrono::DateTime<chrono::Utc>));
        assert!(kind.ordered);
    }

    #[test]
    fn optional_qualified_option() {
        let kind = FieldKind::of(&parse_quote!(std::option::Option<f64>));
        assert!(kind.nullable);
        assert!(kind.ordered);
    }

    #[test]
    fn bool_is_plain() {
        let kind = FieldKind::of(&parse_quote!(bool));
        assert!(!kind.ordered);
        assert!(!kind.textual);
        assert!(!kind.nullable);
    }
}
