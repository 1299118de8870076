// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Doc comment extraction.
//!
//! Doc comments (`///`) arrive as `#[doc = "..."]` attributes. The first
//! line of a field's doc is appended to the docs of the methods generated
//! for that field:
//!
//! ```rust,ignore
//! /// Login shown to other users.
//! pub name: String,
//!
//! // name_eq gets:
//! // /// Keep rows where `name` equals the given value.
//! // ///
//! // /// Field: Login shown to other users.
//! ```

use syn::Attribute;

/// Extract the first non-empty doc comment line.
///
/// Returns `None` if the attributes carry no doc text.
pub fn extract_doc_summary(attrs: &[Attribute]) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .map(|line| line.trim().to_string())
        .find(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_attrs(input: &str) -> Vec<Attribute> {
        let item: syn::ItemStruct = syn::parse_str(input).unwrap();
        item.attrs
    }

    #[test]
    fn first_line_only() {
        let attrs = parse_attrs(
            r#"
            /// Login name.
            ///
            /// Unique per tenant.
            struct Foo;
            "#
        );
        assert_eq!(extract_doc_summary(&attrs), Some("Login name.".to_string()));
    }

    #[test]
    fn skips_blank_lines() {
        let attrs = parse_attrs(
            r#"
            ///
            ///   Trimmed.
            struct Foo;
            "#
        );
        assert_eq!(extract_doc_summary(&attrs), Some("Trimmed.".to_string()));
    }

    #[test]
    fn no_docs() {
        let attrs = parse_attrs("#[derive(Debug)] struct Foo;");
        assert_eq!(extract_doc_summary(&attrs), None);
    }
}
