// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `{Struct}DbSchema` and the `Model` impl.
//!
//! ```rust,ignore
//! pub struct UserDbSchema;
//!
//! impl UserDbSchema {
//!     pub const ID: Field = Field::new("id");
//!     pub const NAME: Field = Field::new("name");
//!
//!     pub fn fields() -> &'static [Field] { ... }
//! }
//!
//! impl Model for User {
//!     const TABLE: &'static str = "user";
//!     const COLUMNS: &'static [&'static str] = &["id", "name"];
//! }
//! ```

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::context::QsStructContext;
use crate::utils::naming::column_const_name;

/// Generate the schema type and `impl Model`.
pub fn generate(ctx: &QsStructContext<'_>) -> TokenStream {
    let vis = &ctx.model.vis;
    let model = ctx.model_name();
    let schema = ctx.schema_type_name();
    let table = &ctx.model.table;
    let columns = ctx.model.columns();

    let consts: Vec<Ident> = columns
        .iter()
        .map(|column| Ident::new(&column_const_name(column), Span::call_site()))
        .collect();
    let const_docs = columns.iter().map(|column| format!("`{column}` column."));
    let doc = format!("Column names of [`{model}`].");

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #schema;

        impl #schema {
            #(
                #[doc = #const_docs]
                pub const #consts: ::queryset_core::Field = ::queryset_core::Field::new(#columns);
            )*

            /// Every column, in field declaration order.
            pub fn fields() -> &'static [::queryset_core::Field] {
                const ALL: &[::queryset_core::Field] = &[#(#schema::#consts),*];
                ALL
            }
        }

        impl ::queryset_core::Model for #model {
            const TABLE: &'static str = #table;
            const COLUMNS: &'static [&'static str] = &[#(#columns),*];
        }
    }
}
