// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field filter shapes.
//!
//! | Shape | Example | Delegate call |
//! |-------|---------|---------------|
//! | [`UnaryFilterMethod`] | `email_is_null()` | `where_column("email", "IS NULL", vec![])` |
//! | [`BinaryFilterMethod`] | `age_gte(age: i32)` | `where_column("age", ">= ?", vec![age.into()])` |
//! | [`InFilterMethod`] | `id_in(id: i64, id_rest: impl IntoIterator<Item = i64>)` | `where_column("id", "IN (?)", vec![Value::List(..)])` |

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::LitStr;

use super::{
    MethodShape,
    parts::{Chained, DbCall, NArgs, NoArgs, OnFieldMethod, OneArg, Receiver}
};
use crate::{queryset::context::QsFieldContext, utils::naming::where_condition};

/// Comparison phrase shown in generated docs.
fn describe(operation: &str) -> &'static str {
    match operation {
        "eq" => "equals the given value",
        "ne" => "differs from the given value",
        "lt" => "is less than the given value",
        "lte" => "is at most the given value",
        "gt" => "is greater than the given value",
        "gte" => "is at least the given value",
        "like" => "matches the given `LIKE` pattern",
        "not_like" => "does not match the given `LIKE` pattern",
        "in" => "is one of the given values",
        "not_in" => "is none of the given values",
        _ => "matches the given value"
    }
}

/// Filter without arguments, `IS NULL` / `IS NOT NULL`.
pub struct UnaryFilterMethod {
    receiver: Receiver,
    method:   OnFieldMethod,
    args:     NoArgs,
    chained:  Chained,
    call:     DbCall,
    doc:      String
}

impl UnaryFilterMethod {
    /// Build for `is_null` or `is_not_null`.
    ///
    /// # Errors
    ///
    /// Returns an error for any other operation.
    pub fn new(ctx: QsFieldContext<'_>) -> syn::Result<Self> {
        let condition = match ctx.operation_name {
            "is_null" => "IS NULL",
            "is_not_null" => "IS NOT NULL",
            other => {
                return Err(syn::Error::new_spanned(
                    &ctx.field.ident,
                    format!("no unary filter for operation `{other}`")
                ));
            }
        };
        let column = ctx.column();

        Ok(Self {
            receiver: Receiver,
            method: ctx.on_field_method(true),
            args: NoArgs,
            chained: ctx.chained(),
            call: DbCall::new("where_column", vec![
                quote!(#column),
                quote!(#condition),
                quote!(::std::vec::Vec::new()),
            ]),
            doc: format!(
                "Keep rows where `{}` {condition}.{}",
                ctx.field.column,
                ctx.doc_suffix()
            )
        })
    }
}

impl MethodShape for UnaryFilterMethod {
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

/// Filter comparing the column with one value of the field's type.
pub struct BinaryFilterMethod {
    receiver: Receiver,
    method:   OnFieldMethod,
    arg:      OneArg,
    chained:  Chained,
    call:     DbCall,
    doc:      String
}

impl BinaryFilterMethod {
    /// Build for one of `eq`, `ne`, `lt`, `lte`, `gt`, `gte`, `like`,
    /// `not_like`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation has no SQL condition.
    pub fn new(ctx: QsFieldContext<'_>) -> syn::Result<Self> {
        let condition = where_condition(ctx.operation_name).ok_or_else(|| {
            syn::Error::new_spanned(
                &ctx.field.ident,
                format!("no SQL condition for operation `{}`", ctx.operation_name)
            )
        })?;
        let column = ctx.column();
        let arg = OneArg::new(ctx.arg_name(), ctx.arg_type());
        let arg_name = &arg.name;

        Ok(Self {
            receiver: Receiver,
            method: ctx.on_field_method(true),
            call: DbCall::new("where_column", vec![
                quote!(#column),
                quote!(#condition),
                quote!(::std::vec![::queryset_core::Value::from(#arg_name)]),
            ]),
            arg,
            chained: ctx.chained(),
            doc: format!(
                "Keep rows where `{}` {}.{}",
                ctx.field.column,
                describe(ctx.operation_name),
                ctx.doc_suffix()
            )
        })
    }
}

impl MethodShape for BinaryFilterMethod {
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
        vec![self.arg.tokens()]
    }

    fn ret(&self) -> TokenStream {
        self.chained.ret()
    }

    fn body(&self) -> TokenStream {
        self.chained.wrap(self.call.tokens())
    }
}

/// `IN` / `NOT IN` filter over one or more values.
///
/// The first value is a separate argument so the list is never empty.
pub struct InFilterMethod {
    receiver:  Receiver,
    method:    OnFieldMethod,
    args:      NArgs,
    chained:   Chained,
    column:    LitStr,
    condition: &'static str,
    doc:       String
}

impl InFilterMethod {
    /// Build for `in` or `not_in`.
    pub fn new(ctx: QsFieldContext<'_>) -> Self {
        let first = OneArg::new(ctx.arg_name(), ctx.arg_type());
        let rest = first.rest();
        let condition = if ctx.operation_name == "not_in" {
            "NOT IN (?)"
        } else {
            "IN (?)"
        };

        Self {
            receiver: Receiver,
            method: ctx.on_field_method(true),
            args: NArgs(vec![first, rest]),
            chained: ctx.chained(),
            column: ctx.column(),
            condition,
            doc: format!(
                "Keep rows where `{}` {}.{}",
                ctx.field.column,
                describe(ctx.operation_name),
                ctx.doc_suffix()
            )
        }
    }
}

impl MethodShape for InFilterMethod {
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
        let first = &self.args.0[0].name;
        let rest = &self.args.0[1].name;
        let column = &self.column;
        let condition = self.condition;
        let call = DbCall::new("where_column", vec![
            quote!(#column),
            quote!(#condition),
            quote!(::std::vec![::queryset_core::Value::List(args)]),
        ]);
        let wrapped = self.chained.wrap(call.tokens());

        quote! {
            let args: ::std::vec::Vec<::queryset_core::Value> = ::core::iter::once(#first)
                .chain(#rest)
                .map(::queryset_core::Value::from)
                .collect();
            #wrapped
        }
    }
}
