// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Operation-first field methods without arguments.
//!
//! | Method | Delegate call |
//! |--------|---------------|
//! | `order_asc_by_{f}` | `order_column("{column}", SortDirection::Asc)` |
//! | `order_desc_by_{f}` | `order_column("{column}", SortDirection::Desc)` |
//! | `preload_{f}` | `preload("{field}")` |
//!
//! Ordering refers to the column name, preloading to the field name.

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use super::{
    MethodShape,
    parts::{Chained, DbCall, NoArgs, OnFieldMethod, Receiver}
};
use crate::queryset::context::QsFieldContext;

/// Chained field method with no arguments.
pub struct FieldOperationNoArgsMethod {
    receiver: Receiver,
    method:   OnFieldMethod,
    args:     NoArgs,
    chained:  Chained,
    call:     DbCall,
    doc:      String
}

impl FieldOperationNoArgsMethod {
    /// `order_asc_by_{f}` or `order_desc_by_{f}`, by the operation name.
    pub fn order(ctx: QsFieldContext<'_>) -> Self {
        let column = ctx.column();
        let (direction, word) = if ctx.operation_name == "order_desc_by" {
            (quote!(::queryset_core::SortDirection::Desc), "descending")
        } else {
            (quote!(::queryset_core::SortDirection::Asc), "ascending")
        };

        Self {
            receiver: Receiver,
            method: ctx.on_field_method(false),
            args: NoArgs,
            chained: ctx.chained(),
            call: DbCall::new("order_column", vec![quote!(#column), direction]),
            doc: format!("Order by `{}` {word}.{}", ctx.field.column, ctx.doc_suffix())
        }
    }

    /// `preload_{f}`.
    pub fn preload(ctx: QsFieldContext<'_>) -> Self {
        let relation = ctx.relation();

        Self {
            receiver: Receiver,
            method: ctx.on_field_method(false),
            args: NoArgs,
            chained: ctx.chained(),
            call: DbCall::new("preload", vec![quote!(#relation)]),
            doc: format!(
                "Load the `{}` relation after the main query.{}",
                ctx.field.name_str(),
                ctx.doc_suffix()
            )
        }
    }
}

impl MethodShape for FieldOperationNoArgsMethod {
    fn doc(&self) -> String {
        self.doc.clone()
    }

    fn name(&self) -> Ident {
        self.method.ident()
    }

    fn receiver(&self) -> TokenStream {
        self.receiver.tokens()
    }

    fn args(&self) -> Vec<TokenStream> {
        self.args.tokens()
    }

    fn ret(&self) -> TokenStream {
        self.chained.ret()
    }

    fn body(&self) -> TokenStream {
        self.chained.wrap(self.call.tokens())
    }
}
