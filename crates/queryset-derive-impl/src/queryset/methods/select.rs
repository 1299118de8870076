// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level methods: pagination and terminal operations.
//!
//! | Shape | Method | Returns |
//! |-------|--------|---------|
//! | [`StructOperationOneArgMethod`] | `limit(limit: u64)`, `offset(offset: u64)` | `Self` |
//! | [`SelectMethod`] | `all()` | `QueryResult<Vec<S>, E::Error>` |
//! | [`SelectMethod`] | `one()` | `QueryResult<S, E::Error>` |
//! | [`CountMethod`] | `count()` | `QueryResult<u64, E::Error>` |
//! | [`DeleteMethod`] | `delete()` | `QueryResult<(), E::Error>` |
//! | [`DeleteMethod`] | `delete_num()` | `QueryResult<u64, E::Error>` |
//! | [`GetUpdaterMethod`] | `get_updater()` | `{S}Updater<E>` |

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use super::{
    MethodShape,
    parts::{
        Chained, ConstBody, ConstRet, DbCall, ErroredDbCall, NamedMethod, NoArgs, OneArg,
        executor_param
    }
};

/// `limit` / `offset`: one `u64` argument passed through to `Db`.
pub struct StructOperationOneArgMethod {
    method:  NamedMethod,
    arg:     OneArg,
    chained: Chained,
    call:    DbCall,
    doc:     &'static str
}

impl StructOperationOneArgMethod {
    fn new(name: &'static str, doc: &'static str) -> Self {
        let arg = OneArg::with_tokens(name, quote!(u64));
        let arg_name = &arg.name;
        Self {
            method: NamedMethod::new(name),
            call: DbCall::new(name, vec![quote!(#arg_name)]),
            arg,
            chained: Chained,
            doc
        }
    }

    /// `limit(limit: u64)`.
    pub fn limit() -> Self {
        Self::new("limit", "Return at most `limit` rows. The last call wins.")
    }

    /// `offset(offset: u64)`.
    pub fn offset() -> Self {
        Self::new("offset", "Skip the first `offset` rows. The last call wins.")
    }
}

impl MethodShape for StructOperationOneArgMethod {
    fn doc(&self) -> String {
        self.doc.to_string()
    }

    fn name(&self) -> Ident {
        self.method.ident()
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

/// `all` / `one`: fetch and decode models.
pub struct SelectMethod {
    method: NamedMethod,
    args:   NoArgs,
    ret:    ConstRet,
    call:   ErroredDbCall,
    model:  Ident,
    doc:    &'static str
}

impl SelectMethod {
    /// `all()`: every matching row.
    pub fn all(model: &Ident) -> Self {
        Self {
            method: NamedMethod::new("all"),
            args: NoArgs,
            ret: ConstRet::result(quote!(::std::vec::Vec<#model>)),
            call: ErroredDbCall::new("find", Some(quote!(#model))),
            model: model.clone(),
            doc: "Fetch every matching row, then load requested preloads."
        }
    }

    /// `one()`: the first matching row.
    pub fn one(model: &Ident) -> Self {
        Self {
            method: NamedMethod::new("one"),
            args: NoArgs,
            ret: ConstRet::result(quote!(#model)),
            call: ErroredDbCall::new("first", Some(quote!(#model))),
            model: model.clone(),
            doc: "Fetch the first matching row.\n\n# Errors\n\nReturns \
                  `queryset_core::Error::RecordNotFound` when nothing was fetched."
        }
    }
}

impl MethodShape for SelectMethod {
    fn doc(&self) -> String {
        self.doc.to_string()
    }

    fn name(&self) -> Ident {
        self.method.ident()
    }

    fn args(&self) -> Vec<TokenStream> {
        self.args.tokens()
    }

    fn ret(&self) -> TokenStream {
        self.ret.tokens()
    }

    fn body(&self) -> TokenStream {
        self.call.tokens()
    }

    fn where_clause(&self) -> Option<TokenStream> {
        let model = &self.model;
        let executor = executor_param();
        Some(quote!(
            #model: ::queryset_core::FromRecord<#executor::Row> + ::core::marker::Send
        ))
    }

    fn is_async(&self) -> bool {
        true
    }
}

/// `count()`.
pub struct CountMethod;

impl MethodShape for CountMethod {
    fn doc(&self) -> String {
        "Count matching rows. Ordering and pagination are ignored.".to_string()
    }

    fn name(&self) -> Ident {
        NamedMethod::new("count").ident()
    }

    fn args(&self) -> Vec<TokenStream> {
        NoArgs.tokens()
    }

    fn ret(&self) -> TokenStream {
        ConstRet::result(quote!(u64)).tokens()
    }

    fn body(&self) -> TokenStream {
        ErroredDbCall::new("count", None).tokens()
    }

    fn is_async(&self) -> bool {
        true
    }
}

/// `delete()` / `delete_num()`.
pub struct DeleteMethod {
    method: NamedMethod,
    ret:    ConstRet,
    body:   ConstBody,
    doc:    &'static str
}

impl DeleteMethod {
    /// `delete()`: discard the affected row count.
    pub fn delete() -> Self {
        let call = ErroredDbCall::new("delete", None).tokens();
        Self {
            method: NamedMethod::new("delete"),
            ret: ConstRet::result(quote!(())),
            body: ConstBody(quote! {
                #call?;
                ::core::result::Result::Ok(())
            }),
            doc: "Delete matching rows."
        }
    }

    /// `delete_num()`: return the affected row count.
    pub fn delete_num() -> Self {
        Self {
            method: NamedMethod::new("delete_num"),
            ret: ConstRet::result(quote!(u64)),
            body: ConstBody(ErroredDbCall::new("delete", None).tokens()),
            doc: "Delete matching rows and return how many were removed."
        }
    }
}

impl MethodShape for DeleteMethod {
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
        self.body.tokens()
    }

    fn is_async(&self) -> bool {
        true
    }
}

/// `get_updater()`: hand the scope over to the updater.
pub struct GetUpdaterMethod {
    updater: Ident
}

impl GetUpdaterMethod {
    /// Create for the given updater type.
    pub fn new(updater: Ident) -> Self {
        Self {
            updater
        }
    }
}

impl MethodShape for GetUpdaterMethod {
    fn doc(&self) -> String {
        format!("Start a bulk update over the current scope with [`{}`].", self.updater)
    }

    fn name(&self) -> Ident {
        NamedMethod::new("get_updater").ident()
    }

    fn args(&self) -> Vec<TokenStream> {
        NoArgs.tokens()
    }

    fn ret(&self) -> TokenStream {
        let updater = &self.updater;
        let executor = executor_param();
        ConstRet(quote!(#updater<#executor>)).tokens()
    }

    fn body(&self) -> TokenStream {
        let updater = &self.updater;
        ConstBody(quote!(#updater::new(self.db))).tokens()
    }
}
