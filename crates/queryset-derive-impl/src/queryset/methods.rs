// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method-shape catalog.
//!
//! Every generated QuerySet method is described by a shape implementing
//! [`MethodShape`]. Shapes are assembled from the parts in [`parts`] and
//! rendered by [`render`] into
//!
//! ```rust,ignore
//! #[doc = "..."]
//! pub [async] fn name(self, args...) -> Ret [where ...] { body }
//! ```
//!
//! # Catalog
//!
//! | Shape | Methods | Applies to |
//! |-------|---------|------------|
//! | [`StructOperationOneArgMethod`] | `limit`, `offset` | struct |
//! | [`SelectMethod`] | `all`, `one` | struct |
//! | [`CountMethod`] | `count` | struct |
//! | [`DeleteMethod`] | `delete`, `delete_num` | struct |
//! | [`GetUpdaterMethod`] | `get_updater` | struct, when `updater` |
//! | [`BinaryFilterMethod`] | `{f}_eq`, `{f}_ne` | column fields |
//! | [`InFilterMethod`] | `{f}_in`, `{f}_not_in` | column fields |
//! | [`BinaryFilterMethod`] | `{f}_lt`, `{f}_lte`, `{f}_gt`, `{f}_gte` | ordered fields |
//! | [`BinaryFilterMethod`] | `{f}_like`, `{f}_not_like` | textual fields |
//! | [`UnaryFilterMethod`] | `{f}_is_null`, `{f}_is_not_null` | `Option` fields |
//! | [`FieldOperationNoArgsMethod`] | `order_asc_by_{f}`, `order_desc_by_{f}` | column fields |
//! | [`FieldOperationNoArgsMethod`] | `preload_{f}` | preload fields |
//!
//! Struct-level methods come first, then fields in declaration order, each
//! field's methods in the order above.

mod field_op;
mod filter;
pub mod parts;
mod select;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

pub use field_op::FieldOperationNoArgsMethod;
pub use filter::{BinaryFilterMethod, InFilterMethod, UnaryFilterMethod};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
pub use select::{
    CountMethod, DeleteMethod, GetUpdaterMethod, SelectMethod, StructOperationOneArgMethod
};

use super::context::{QsFieldContext, QsStructContext};

/// One generated method, described part by part.
pub trait MethodShape {
    /// Doc comment text.
    fn doc(&self) -> String;

    /// Method name.
    fn name(&self) -> Ident;

    /// Receiver tokens.
    fn receiver(&self) -> TokenStream {
        quote!(self)
    }

    /// Arguments after the receiver.
    fn args(&self) -> Vec<TokenStream>;

    /// Return type.
    fn ret(&self) -> TokenStream;

    /// Method body.
    fn body(&self) -> TokenStream;

    /// Extra `where` predicates.
    fn where_clause(&self) -> Option<TokenStream> {
        None
    }

    /// Render as `async fn`.
    fn is_async(&self) -> bool {
        false
    }
}

/// Render a shape into a method definition.
pub fn render(shape: &dyn MethodShape) -> TokenStream {
    let doc = shape.doc();
    let name = shape.name();
    let receiver = shape.receiver();
    let args = shape.args();
    let ret = shape.ret();
    let body = shape.body();
    let where_clause = shape.where_clause().map(|predicates| quote!(where #predicates));

    if shape.is_async() {
        quote! {
            #[doc = #doc]
            pub async fn #name(#receiver #(, #args)*) -> #ret #where_clause {
                #body
            }
        }
    } else {
        quote! {
            #[doc = #doc]
            #[must_use]
            pub fn #name(#receiver #(, #args)*) -> #ret #where_clause {
                #body
            }
        }
    }
}

/// Boxed shape.
pub type Shape<'a> = Box<dyn MethodShape + 'a>;

/// Build the full catalog for a struct.
///
/// # Errors
///
/// Returns an error if an operation has no SQL condition registered or two
/// fields produce the same method name (`a_not` + `in` and `a` + `not_in`).
pub fn catalog<'a>(ctx: &QsStructContext<'a>) -> syn::Result<Vec<Shape<'a>>> {
    let model = ctx.model;
    let mut shapes = struct_methods(ctx);
    let mut names: HashSet<String> = shapes.iter().map(|s| s.name().to_string()).collect();

    for field in &model.fields {
        let fctx = ctx.field(field);
        let field_shapes = if field.is_column() {
            column_methods(fctx)?
        } else if field.is_preload() {
            vec![Box::new(FieldOperationNoArgsMethod::preload(
                fctx.with_operation_name("preload")
            )) as Shape<'a>]
        } else {
            continue;
        };

        for shape in &field_shapes {
            let name = shape.name().to_string();
            if !names.insert(name.clone()) {
                return Err(syn::Error::new_spanned(
                    &field.ident,
                    format!("generated method `{name}` is already defined by another field")
                ));
            }
        }
        shapes.extend(field_shapes);
    }
    Ok(shapes)
}

fn struct_methods<'a>(ctx: &QsStructContext<'a>) -> Vec<Shape<'a>> {
    let model = ctx.model_name();
    let mut shapes: Vec<Shape<'a>> = vec![
        Box::new(StructOperationOneArgMethod::limit()),
        Box::new(StructOperationOneArgMethod::offset()),
        Box::new(SelectMethod::all(model)),
        Box::new(SelectMethod::one(model)),
        Box::new(CountMethod),
        Box::new(DeleteMethod::delete()),
        Box::new(DeleteMethod::delete_num()),
    ];
    if ctx.model.updater {
        shapes.push(Box::new(GetUpdaterMethod::new(ctx.updater_type_name())));
    }
    shapes
}

fn column_methods<'a>(ctx: QsFieldContext<'a>) -> syn::Result<Vec<Shape<'a>>> {
    let mut shapes: Vec<Shape<'a>> = Vec::new();

    for op in ["eq", "ne"] {
        shapes.push(Box::new(BinaryFilterMethod::new(ctx.with_operation_name(op))?));
    }
    for op in ["in", "not_in"] {
        shapes.push(Box::new(InFilterMethod::new(ctx.with_operation_name(op))));
    }
    if ctx.field.is_ordered() {
        for op in ["lt", "lte", "gt", "gte"] {
            shapes.push(Box::new(BinaryFilterMethod::new(ctx.with_operation_name(op))?));
        }
    }
    if ctx.field.kind.textual {
        for op in ["like", "not_like"] {
            shapes.push(Box::new(BinaryFilterMethod::new(ctx.with_operation_name(op))?));
        }
    }
    if ctx.field.kind.nullable {
        for op in ["is_null", "is_not_null"] {
            shapes.push(Box::new(UnaryFilterMethod::new(ctx.with_operation_name(op))?));
        }
    }
    for op in ["order_asc_by", "order_desc_by"] {
        shapes.push(Box::new(FieldOperationNoArgsMethod::order(
            ctx.with_operation_name(op)
        )));
    }

    Ok(shapes)
}
