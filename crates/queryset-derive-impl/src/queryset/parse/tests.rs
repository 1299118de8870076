// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for struct and field parsing.
//!
//! # Test Categories
//!
//! | Category | Tests |
//! |----------|-------|
//! | Defaults | `default_table_and_columns`, `updater_enabled_by_default` |
//! | Struct attributes | `explicit_table`, `updater_disabled` |
//! | Field attributes | `skip_and_preload`, `explicit_column`, `combined_keys` |
//! | Errors | `rejects_*` |

use syn::DeriveInput;

use super::ModelDef;

fn parse(input: DeriveInput) -> darling::Result<ModelDef> {
    ModelDef::from_derive_input(&input)
}

#[test]
fn default_table_and_columns() {
    let model = parse(syn::parse_quote! {
        pub struct BlogPost {
            pub id: i64,
            pub AuthorID: i64,
            pub title: String,
        }
    })
    .unwrap();

    assert_eq!(model.name(), "BlogPost");
    assert_eq!(model.table, "blog_post");
    assert_eq!(model.columns(), vec!["id", "author_id", "title"]);
}

#[test]
fn updater_enabled_by_default() {
    let model = parse(syn::parse_quote! {
        struct User {
            id: i64,
        }
    })
    .unwrap();
    assert!(model.updater);
}

#[test]
fn explicit_table() {
    let model = parse(syn::parse_quote! {
        #[queryset(table = "app.users")]
        struct User {
            id: i64,
        }
    })
    .unwrap();
    assert_eq!(model.table, "app.users");
}

#[test]
fn updater_disabled() {
    let model = parse(syn::parse_quote! {
        #[queryset(updater = false)]
        struct User {
            id: i64,
        }
    })
    .unwrap();
    assert!(!model.updater);
}

#[test]
fn skip_and_preload() {
    let model = parse(syn::parse_quote! {
        struct User {
            id: i64,
            #[queryset(skip)]
            cache: Vec<u8>,
            #[queryset(preload)]
            posts: Vec<Post>,
        }
    })
    .unwrap();

    assert_eq!(model.columns(), vec!["id"]);
    let preloads: Vec<_> = model
        .fields
        .iter()
        .filter(|f| f.is_preload())
        .map(|f| f.name_str())
        .collect();
    assert_eq!(preloads, vec!["posts"]);
    assert_eq!(model.fields.len(), 3);
}

#[test]
fn explicit_column() {
    let model = parse(syn::parse_quote! {
        struct User {
            #[queryset(column = "user_name")]
            name: String,
        }
    })
    .unwrap();
    assert_eq!(model.columns(), vec!["user_name"]);
}

#[test]
fn combined_keys() {
    let model = parse(syn::parse_quote! {
        struct Event {
            #[queryset(column = "ts", ordered)]
            stamp: Timestamp,
        }
    })
    .unwrap();

    let field = &model.fields[0];
    assert_eq!(field.column, "ts");
    assert!(field.is_ordered());
    assert!(!field.kind.ordered);
}

#[test]
fn raw_identifier_field() {
    let model = parse(syn::parse_quote! {
        struct Item {
            r#type: String,
        }
    })
    .unwrap();

    let field = &model.fields[0];
    assert_eq!(field.name_str(), "type");
    assert_eq!(field.column, "type");
}

#[test]
fn doc_summary_is_captured() {
    let model = parse(syn::parse_quote! {
        struct User {
            /// Display name.
            ///
            /// Not unique.
            name: String,
        }
    })
    .unwrap();
    assert_eq!(model.fields[0].doc.as_deref(), Some("Display name."));
}

#[test]
fn rejects_enum() {
    let result = parse(syn::parse_quote! {
        enum Status {
            Active,
        }
    });
    assert!(result.is_err());
}

#[test]
fn rejects_tuple_struct() {
    let result = parse(syn::parse_quote! {
        struct Pair(i64, i64);
    });
    assert!(result.is_err());
}

#[test]
fn rejects_generic_struct() {
    let result = parse(syn::parse_quote! {
        struct Wrapper<T> {
            inner: T,
        }
    });
    assert!(result.is_err());
}

#[test]
fn rejects_unknown_field_key() {
    let result = parse(syn::parse_quote! {
        struct User {
            #[queryset(indexed)]
            id: i64,
        }
    });
    assert!(result.is_err());
}

#[test]
fn rejects_preload_with_column() {
    let result = parse(syn::parse_quote! {
        struct User {
            #[queryset(preload, column = "posts")]
            posts: Vec<Post>,
        }
    });
    assert!(result.is_err());
}

#[test]
fn rejects_duplicate_column() {
    let result = parse(syn::parse_quote! {
        struct User {
            name: String,
            #[queryset(column = "name")]
            display_name: String,
        }
    });
    let err = result.unwrap_err();
    assert!(err.to_string().contains("already used"));
}

#[test]
fn rejects_clashing_schema_constants() {
    let result = parse(syn::parse_quote! {
        struct User {
            user_name: String,
            #[queryset(column = "user-name")]
            alias: String,
        }
    });
    let err = result.unwrap_err();
    assert!(err.to_string().contains("schema constant `USER_NAME`"));
}

#[test]
fn rejects_empty_table() {
    let result = parse(syn::parse_quote! {
        #[queryset(table = "")]
        struct User {
            id: i64,
        }
    });
    assert!(result.is_err());
}

#[test]
fn skipped_field_does_not_clash() {
    let model = parse(syn::parse_quote! {
        struct User {
            name: String,
            #[queryset(skip, column = "name")]
            shadow: String,
        }
    })
    .unwrap();
    assert_eq!(model.columns(), vec!["name"]);
}
