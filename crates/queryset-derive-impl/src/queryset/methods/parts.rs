// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Reusable method parts.
//!
//! Each shape in the catalog is a struct of parts and forwards the
//! [`MethodShape`](super::MethodShape) hooks to them. Parts are small and
//! render one piece of a method signature or body.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Ident, Type};

use crate::utils::naming::method_name;

/// Generic executor parameter of generated types.
///
/// Named so it cannot shadow a user type such as `E` used as a field type.
pub fn executor_param() -> Ident {
    Ident::new("__QsExecutor", Span::call_site())
}

/// Consuming receiver: every generated method takes `self`.
#[derive(Clone, Copy, Default)]
pub struct Receiver;

impl Receiver {
    /// Render the receiver.
    pub fn tokens(&self) -> TokenStream {
        quote!(self)
    }
}

/// Method with a fixed name.
pub struct NamedMethod {
    /// Method name.
    pub name: String
}

impl NamedMethod {
    /// Create from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into()
        }
    }

    /// Method identifier.
    pub fn ident(&self) -> Ident {
        Ident::new(&self.name, Span::call_site())
    }
}

/// Method named after an operation on a field.
pub struct OnFieldMethod {
    /// Operation, e.g. `eq`.
    pub operation: &'static str,

    /// Field name without the raw prefix.
    pub field: String,

    /// `{field}_{op}` when true, `{op}_{field}` otherwise.
    pub field_first: bool
}

impl OnFieldMethod {
    /// Method identifier.
    pub fn ident(&self) -> Ident {
        Ident::new(
            &method_name(self.operation, &self.field, self.field_first),
            Span::call_site()
        )
    }
}

/// Method without arguments.
pub struct NoArgs;

impl NoArgs {
    /// Empty argument list.
    pub fn tokens(&self) -> Vec<TokenStream> {
        Vec::new()
    }
}

/// One typed argument.
#[derive(Clone)]
pub struct OneArg {
    /// Argument identifier.
    pub name: Ident,

    /// Argument type.
    pub ty: TokenStream,

    /// Accept any number of values as `impl IntoIterator<Item = ty>`.
    pub variadic: bool
}

impl OneArg {
    /// Single value argument.
    pub fn new(name: Ident, ty: &Type) -> Self {
        Self {
            name,
            ty: quote!(#ty),
            variadic: false
        }
    }

    /// Argument with a type given as tokens.
    pub fn with_tokens(name: &str, ty: TokenStream) -> Self {
        Self {
            name: Ident::new(name, Span::call_site()),
            ty,
            variadic: false
        }
    }

    /// Variadic tail named `{name}_rest`.
    #[must_use]
    pub fn rest(&self) -> Self {
        Self {
            name: format_ident!("{}_rest", self.name),
            ty: self.ty.clone(),
            variadic: true
        }
    }

    /// Render `name: ty`.
    pub fn tokens(&self) -> TokenStream {
        let Self {
            name,
            ty,
            variadic
        } = self;
        if *variadic {
            quote!(#name: impl ::core::iter::IntoIterator<Item = #ty>)
        } else {
            quote!(#name: #ty)
        }
    }
}

/// Several arguments in order.
pub struct NArgs(pub Vec<OneArg>);

impl NArgs {
    /// Render every argument.
    pub fn tokens(&self) -> Vec<TokenStream> {
        self.0.iter().map(OneArg::tokens).collect()
    }
}

/// Chained method: returns `Self` and wraps the delegate call in a new
/// QuerySet.
#[derive(Clone, Copy)]
pub struct Chained;

impl Chained {
    /// Return type.
    pub fn ret(&self) -> TokenStream {
        quote!(Self)
    }

    /// Wrap a `Db` expression into the QuerySet.
    pub fn wrap(&self, call: TokenStream) -> TokenStream {
        quote!(Self { db: #call })
    }
}

/// Fixed return type.
pub struct ConstRet(pub TokenStream);

impl ConstRet {
    /// `QueryResult<ty, <executor>::Error>`.
    pub fn result(ty: TokenStream) -> Self {
        let executor = executor_param();
        Self(quote!(::queryset_core::QueryResult<#ty, #executor::Error>))
    }

    /// Return type.
    pub fn tokens(&self) -> TokenStream {
        self.0.clone()
    }
}

/// Fixed body.
pub struct ConstBody(pub TokenStream);

impl ConstBody {
    /// Body tokens.
    pub fn tokens(&self) -> TokenStream {
        self.0.clone()
    }
}

/// Synchronous call on the wrapped `Db`: `self.db.method(args)`.
pub struct DbCall {
    /// `Db` method name.
    pub method: &'static str,

    /// Call arguments.
    pub args: Vec<TokenStream>
}

impl DbCall {
    /// Create a call.
    pub fn new(method: &'static str, args: Vec<TokenStream>) -> Self {
        Self {
            method,
            args
        }
    }

    /// Call expression.
    pub fn tokens(&self) -> TokenStream {
        let method = Ident::new(self.method, Span::call_site());
        let args = &self.args;
        quote!(self.db.#method(#(#args),*))
    }
}

/// Awaited call on the wrapped `Db` that returns a `QueryResult`.
pub struct ErroredDbCall {
    /// `Db` method name.
    pub method: &'static str,

    /// Optional turbofish type, e.g. the model for `find::<User>()`.
    pub turbofish: Option<TokenStream>,

    /// Call arguments.
    pub args: Vec<TokenStream>
}

impl ErroredDbCall {
    /// Create a call without arguments.
    pub fn new(method: &'static str, turbofish: Option<TokenStream>) -> Self {
        Self {
            method,
            turbofish,
            args: Vec::new()
        }
    }

    /// Awaited call expression.
    pub fn tokens(&self) -> TokenStream {
        let method = Ident::new(self.method, Span::call_site());
        let args = &self.args;
        match &self.turbofish {
            Some(ty) => quote!(self.db.#method::<#ty>(#(#args),*).await),
            None => quote!(self.db.#method(#(#args),*).await)
        }
    }
}
