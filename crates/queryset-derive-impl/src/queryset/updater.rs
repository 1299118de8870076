// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `{Struct}Updater` generation.
//!
//! The updater takes over the QuerySet's scope and collects column
//! assignments for one `UPDATE` statement:
//!
//! ```rust,ignore
//! let updated = User::query_set(pool)
//!     .email_is_null()
//!     .get_updater()
//!     .set_active(false)
//!     .update_num()
//!     .await?;
//! ```
//!
//! Setters take the declared field type, so `Option<T>` fields accept
//! `None` to write `NULL`. Setting the same column twice keeps the last
//! value.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::LitStr;

use super::{
    context::{QsFieldContext, QsStructContext},
    methods::{
        MethodShape,
        parts::{
            ConstRet, ErroredDbCall, NamedMethod, NoArgs, OnFieldMethod, OneArg, executor_param
        },
        render
    }
};

/// `set_{field}(value)`.
struct SetterMethod {
    method: OnFieldMethod,
    arg:    OneArg,
    column: LitStr,
    doc:    String
}

impl SetterMethod {
    fn new(ctx: QsFieldContext<'_>) -> Self {
        Self {
            method: ctx.on_field_method(false),
            arg: OneArg::new(ctx.arg_name(), &ctx.field.ty),
            column: ctx.column(),
            doc: format!("Assign `{}`.{}", ctx.field.column, ctx.doc_suffix())
        }
    }
}

impl MethodShape for SetterMethod {
    fn doc(&self) -> String {
        self.doc.clone()
    }

    fn name(&self) -> Ident {
        self.method.ident()
    }

    fn args(&self) -> Vec<TokenStream> {
        vec![self.arg.tokens()]
    }

    fn ret(&self) -> TokenStream {
        quote!(Self)
    }

    fn body(&self) -> TokenStream {
        let column = &self.column;
        let arg = &self.arg.name;
        quote!(self.set(#column, ::queryset_core::Value::from(#arg)))
    }
}

/// `update()` / `update_num()`.
struct UpdateMethod {
    method: NamedMethod,
    ret:    ConstRet,
    count:  bool,
    doc:    &'static str
}

impl UpdateMethod {
    fn update() -> Self {
        Self {
            method: NamedMethod::new("update"),
            ret: ConstRet::result(quote!(())),
            count: false,
            doc: "Run the update over the QuerySet's scope.\n\n# Errors\n\nFails with \
                  `RenderError::EmptyUpdate` when no column was set."
        }
    }

    fn update_num() -> Self {
        Self {
            method: NamedMethod::new("update_num"),
            ret: ConstRet::result(quote!(u64)),
            count: true,
            doc: "Run the update and return how many rows changed.\n\n# Errors\n\nFails with \
                  `RenderError::EmptyUpdate` when no column was set."
        }
    }
}

impl MethodShape for UpdateMethod {
    fn doc(&self) -> String {
        self.doc.to_string()
    }

    fn name(&self) -> Ident {
        self.method.ident()
    }

    fn args(&self) -> Vec<TokenStream> {
        NoArgs.tokens()
    }

    fn ret(&self) -> TokenStream {
        self.ret.tokens()
    }

    fn body(&self) -> TokenStream {
        let call = ErroredDbCall {
            method:    "updates",
            turbofish: None,
            args:      vec![quote!(self.assignments)]
        }
        .tokens();
        if self.count {
            call
        } else {
            quote! {
                #call?;
                ::core::result::Result::Ok(())
            }
        }
    }

    fn is_async(&self) -> bool {
        true
    }
}

/// Generate the updater type, or nothing when `updater = false`.
pub fn generate(ctx: &QsStructContext<'_>) -> TokenStream {
    if !ctx.model.updater {
        return TokenStream::new();
    }

    let vis = &ctx.model.vis;
    let model = ctx.model_name();
    let updater = ctx.updater_type_name();
    let qs = ctx.qs_type_name();
    let doc = format!(
        "Bulk update of [`{model}`] rows selected by a [`{qs}`]. Created with `get_updater`."
    );

    let setters = ctx
        .model
        .column_fields()
        .map(|field| render(&SetterMethod::new(ctx.field(field).with_operation_name("set"))));
    let terminals = [UpdateMethod::update(), UpdateMethod::update_num()];
    let terminals = terminals.iter().map(|shape| render(shape));
    let executor = executor_param();

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone)]
        #vis struct #updater<#executor> {
            db: ::queryset_core::Db<#executor>,
            assignments: ::std::vec::Vec<(&'static str, ::queryset_core::Value)>
        }

        impl<#executor> #updater<#executor> {
            /// Start an update over the scope of `db`.
            pub fn new(db: ::queryset_core::Db<#executor>) -> Self {
                Self {
                    db,
                    assignments: ::std::vec::Vec::new()
                }
            }

            /// Assignments recorded so far, in call order.
            pub fn assignments(&self) -> &[(&'static str, ::queryset_core::Value)] {
                &self.assignments
            }

            fn set(mut self, column: &'static str, value: ::queryset_core::Value) -> Self {
                match self.assignments.iter_mut().find(|(name, _)| *name == column) {
                    ::core::option::Option::Some(slot) => slot.1 = value,
                    ::core::option::Option::None => self.assignments.push((column, value))
                }
                self
            }

            #(#setters)*
        }

        impl<#executor: ::queryset_core::Executor> #updater<#executor> {
            #(#terminals)*
        }
    }
}
