// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! QuerySet derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! queryset.rs (orchestrator)
//! │
//! ├── parse/       → Attribute parsing (ModelDef, FieldDef, FieldKind)
//! ├── context.rs   → Type names and per-field generation context
//! ├── methods/     → Method-shape catalog
//! │   ├── parts.rs     → Reusable parts (names, args, returns, delegate calls)
//! │   ├── filter.rs    → Field filters
//! │   ├── field_op.rs  → Ordering and preload
//! │   └── select.rs    → Pagination and terminal operations
//! ├── updater.rs   → {Struct}Updater
//! └── schema.rs    → {Struct}DbSchema and impl Model
//! ```
//!
//! # Generated Code
//!
//! | Item | Purpose |
//! |------|---------|
//! | `UserQuerySet<E>` | Chainable filters, ordering, preloads and terminals |
//! | `User::query_set(executor)` | Entry point |
//! | `UserUpdater<E>` | Bulk `UPDATE` over a QuerySet scope |
//! | `UserDbSchema` | One `Field` constant per column |
//! | `impl Model for User` | Table and selected columns |
//!
//! `E` above stands for the executor parameter, spelled `__QsExecutor` in
//! the expansion so it never shadows a type of the same name at the derive
//! site.

mod context;
mod methods;
pub mod parse;
mod schema;
mod updater;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::{context::QsStructContext, parse::ModelDef};

/// Main entry point for the QuerySet derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ModelDef::from_derive_input(&input) {
        Ok(model) => match generate(&model) {
            Ok(tokens) => tokens.into(),
            Err(err) => err.to_compile_error().into()
        },
        Err(err) => err.write_errors().into()
    }
}

fn generate(model: &ModelDef) -> syn::Result<proc_macro2::TokenStream> {
    let ctx = QsStructContext::new(model);
    let queryset = queryset_type(&ctx)?;
    let updater = updater::generate(&ctx);
    let schema = schema::generate(&ctx);

    Ok(quote! {
        #queryset
        #updater
        #schema
    })
}

/// `{Struct}QuerySet<E>` with every catalog method, plus the
/// `{Struct}::query_set` entry point.
fn queryset_type(ctx: &QsStructContext<'_>) -> syn::Result<proc_macro2::TokenStream> {
    let vis = &ctx.model.vis;
    let model = ctx.model_name();
    let qs = ctx.qs_type_name();
    let shapes = methods::catalog(ctx)?;

    let (terminal, chained): (Vec<_>, Vec<_>) = shapes.iter().partition(|s| s.is_async());
    let chained = chained.into_iter().map(|shape| methods::render(&**shape));
    let terminal = terminal.into_iter().map(|shape| methods::render(&**shape));

    let doc = format!("Chainable query builder for [`{model}`].");
    let executor = methods::parts::executor_param();
    let entry_doc = format!("Start a [`{qs}`] over the whole table.");

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone)]
        #vis struct #qs<#executor> {
            db: ::queryset_core::Db<#executor>
        }

        impl<#executor> #qs<#executor> {
            /// Wrap an existing handle, keeping its scope.
            pub fn new(db: ::queryset_core::Db<#executor>) -> Self {
                Self { db }
            }

            /// Start an unfiltered query over the model's table.
            pub fn from_executor(executor: #executor) -> Self {
                Self::new(::queryset_core::Db::for_model::<#model>(executor))
            }

            /// Wrapped handle.
            pub fn db(&self) -> &::queryset_core::Db<#executor> {
                &self.db
            }

            /// Unwrap into the underlying handle.
            pub fn into_db(self) -> ::queryset_core::Db<#executor> {
                self.db
            }

            #(#chained)*
        }

        impl<#executor: ::queryset_core::Executor> #qs<#executor> {
            #(#terminal)*
        }

        impl #model {
            #[doc = #entry_doc]
            pub fn query_set<#executor>(executor: #executor) -> #qs<#executor> {
                #qs::from_executor(executor)
            }
        }
    })
}
