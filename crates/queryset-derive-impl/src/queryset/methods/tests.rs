// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for the method-shape catalog.
//!
//! Fixtures are parsed with `syn::parse_quote!`; assertions compare method
//! names in catalog order and rendered tokens of individual shapes.

use quote::quote;

use super::*;
use crate::queryset::parse::ModelDef;

fn model(input: syn::DeriveInput) -> ModelDef {
    ModelDef::from_derive_input(&input).unwrap()
}

fn method_names(model: &ModelDef) -> Vec<String> {
    let ctx = QsStructContext::new(model);
    catalog(&ctx)
        .unwrap()
        .iter()
        .map(|shape| shape.name().to_string())
        .collect()
}

fn rendered(model: &ModelDef, name: &str) -> String {
    let ctx = QsStructContext::new(model);
    let shapes = catalog(&ctx).unwrap();
    let shape = shapes
        .iter()
        .find(|shape| shape.name() == name)
        .unwrap_or_else(|| panic!("no method `{name}`"));
    render(&**shape).to_string()
}

fn user() -> ModelDef {
    model(syn::parse_quote! {
        #[queryset(table = "users")]
        pub struct User {
            pub id: i64,
            /// Login shown to other users.
            pub name: String,
            pub email: Option<String>,
            pub active: bool,
            #[queryset(preload)]
            pub posts: Vec<Post>,
            #[queryset(skip)]
            pub cache: Vec<u8>,
        }
    })
}

#[test]
fn catalog_order() {
    let names = method_names(&user());
    let expected = [
        "limit",
        "offset",
        "all",
        "one",
        "count",
        "delete",
        "delete_num",
        "get_updater",
        "id_eq",
        "id_ne",
        "id_in",
        "id_not_in",
        "id_lt",
        "id_lte",
        "id_gt",
        "id_gte",
        "order_asc_by_id",
        "order_desc_by_id",
        "name_eq",
        "name_ne",
        "name_in",
        "name_not_in",
        "name_like",
        "name_not_like",
        "order_asc_by_name",
        "order_desc_by_name",
        "email_eq",
        "email_ne",
        "email_in",
        "email_not_in",
        "email_like",
        "email_not_like",
        "email_is_null",
        "email_is_not_null",
        "order_asc_by_email",
        "order_desc_by_email",
        "active_eq",
        "active_ne",
        "active_in",
        "active_not_in",
        "order_asc_by_active",
        "order_desc_by_active",
        "preload_posts"
    ];
    assert_eq!(names, expected);
}

#[test]
fn no_updater_method_when_disabled() {
    let model = model(syn::parse_quote! {
        #[queryset(updater = false)]
        struct Tag {
            id: i64,
        }
    });
    assert!(!method_names(&model).contains(&"get_updater".to_string()));
}

#[test]
fn binary_filter_body() {
    let output = rendered(&user(), "id_gte");
    let expected = quote! {
        #[doc = "Keep rows where `id` is at least the given value."]
        #[must_use]
        pub fn id_gte(self, id: i64) -> Self {
            Self {
                db: self.db.where_column(
                    "id",
                    ">= ?",
                    ::std::vec![::queryset_core::Value::from(id)]
                )
            }
        }
    };
    assert_eq!(output, expected.to_string());
}

#[test]
fn nullable_filter_takes_inner_type() {
    let output = rendered(&user(), "email_eq");
    assert!(output.contains("email : String"));
    assert!(!output.contains("Option"));
}

#[test]
fn unary_filter_has_no_args() {
    let output = rendered(&user(), "email_is_not_null");
    let expected = quote! {
        #[doc = "Keep rows where `email` IS NOT NULL."]
        #[must_use]
        pub fn email_is_not_null(self) -> Self {
            Self {
                db: self.db.where_column("email", "IS NOT NULL", ::std::vec::Vec::new())
            }
        }
    };
    assert_eq!(output, expected.to_string());
}

#[test]
fn in_filter_is_variadic() {
    let output = rendered(&user(), "id_not_in");
    assert!(output.contains("id : i64 , id_rest : impl :: core :: iter :: IntoIterator < Item = i64 >"));
    assert!(output.contains("\"NOT IN (?)\""));
    assert!(output.contains("Value :: List (args)"));
}

#[test]
fn field_doc_is_appended() {
    let output = rendered(&user(), "name_like");
    assert!(output.contains("Field: Login shown to other users."));
}

#[test]
fn ordering_uses_column_and_preload_uses_field() {
    let model = model(syn::parse_quote! {
        struct User {
            #[queryset(column = "created")]
            created_at: i64,
            #[queryset(preload)]
            AuthoredPosts: Vec<Post>,
        }
    });

    let order = rendered(&model, "order_desc_by_created_at");
    assert!(order.contains("order_column (\"created\" , :: queryset_core :: SortDirection :: Desc)"));

    let preload = rendered(&model, "preload_authored_posts");
    assert!(preload.contains("preload (\"AuthoredPosts\")"));
}

#[test]
fn select_methods_are_async_with_bounds() {
    let output = rendered(&user(), "one");
    assert!(output.starts_with("# [doc ="));
    assert!(output.contains(
        "pub async fn one (self) -> :: queryset_core :: QueryResult < User , __QsExecutor :: Error >"
    ));
    assert!(output.contains("where User : :: queryset_core :: FromRecord < __QsExecutor :: Row >"));
    assert!(output.contains("self . db . first :: < User > () . await"));
    assert!(output.contains("RecordNotFound"));
}

#[test]
fn delete_discards_count() {
    let delete = rendered(&user(), "delete");
    assert!(delete.contains("self . db . delete () . await ?"));
    assert!(delete.contains(":: core :: result :: Result :: Ok (())"));

    let delete_num = rendered(&user(), "delete_num");
    assert!(delete_num.contains("QueryResult < u64 , __QsExecutor :: Error >"));
}

#[test]
fn get_updater_hands_over_scope() {
    let output = rendered(&user(), "get_updater");
    assert!(output.contains("-> UserUpdater < __QsExecutor >"));
    assert!(output.contains("UserUpdater :: new (self . db)"));
}

#[test]
fn keyword_field_argument() {
    let model = model(syn::parse_quote! {
        struct Item {
            r#type: String,
        }
    });
    let output = rendered(&model, "type_eq");
    assert!(output.contains("type_value : String"));
}

#[test]
fn initialism_field() {
    let model = model(syn::parse_quote! {
        struct Account {
            ID: i64,
        }
    });
    let names = method_names(&model);
    assert!(names.contains(&"id_eq".to_string()));
    assert!(names.contains(&"order_asc_by_id".to_string()));
    assert!(rendered(&model, "id_eq").contains("(self , id : i64)"));
}

#[test]
fn clashing_method_names_are_rejected() {
    let model = model(syn::parse_quote! {
        struct Pair {
            a: i64,
            a_not: i64,
        }
    });
    let ctx = QsStructContext::new(&model);
    let err = catalog(&ctx).err().unwrap();
    assert!(err.to_string().contains("a_not_in"));
}

#[test]
fn unknown_operation_is_an_error() {
    let model = user();
    let ctx = QsStructContext::new(&model);
    let field = ctx.field(&model.fields[0]).with_operation_name("between");
    assert!(BinaryFilterMethod::new(field).is_err());
    assert!(UnaryFilterMethod::new(field).is_err());
}
