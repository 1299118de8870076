// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation context shared by method shapes.
//!
//! [`QsStructContext`] precomputes the generated type names for one struct;
//! [`QsFieldContext`] narrows it to one field and one operation.

use proc_macro2::Span;
use quote::format_ident;
use syn::{Ident, LitStr, Type};

use super::{
    methods::parts::{Chained, OnFieldMethod},
    parse::{FieldDef, ModelDef}
};
use crate::utils::naming::field_name_to_arg_name;

/// Context for one struct.
///
/// | Accessor | Example |
/// |----------|---------|
/// | `qs_type_name` | `UserQuerySet` |
/// | `updater_type_name` | `UserUpdater` |
/// | `schema_type_name` | `UserDbSchema` |
#[derive(Clone, Copy)]
pub struct QsStructContext<'a> {
    /// Parsed struct definition.
    pub model: &'a ModelDef
}

impl<'a> QsStructContext<'a> {
    /// Create a context for a parsed struct.
    pub fn new(model: &'a ModelDef) -> Self {
        Self {
            model
        }
    }

    /// Struct identifier.
    pub fn model_name(&self) -> &'a Ident {
        self.model.name()
    }

    /// `{Struct}QuerySet`.
    pub fn qs_type_name(&self) -> Ident {
        format_ident!("{}QuerySet", self.model_name())
    }

    /// `{Struct}Updater`.
    pub fn updater_type_name(&self) -> Ident {
        format_ident!("{}Updater", self.model_name())
    }

    /// `{Struct}DbSchema`.
    pub fn schema_type_name(&self) -> Ident {
        format_ident!("{}DbSchema", self.model_name())
    }

    /// Context for one field with no operation selected yet.
    pub fn field(&self, field: &'a FieldDef) -> QsFieldContext<'a> {
        QsFieldContext {
            field,
            operation_name: ""
        }
    }
}

/// Context for one field and one operation.
#[derive(Clone, Copy)]
pub struct QsFieldContext<'a> {
    /// Field the method is generated for.
    pub field: &'a FieldDef,

    /// Operation, e.g. `eq` or `order_asc_by`.
    pub operation_name: &'static str
}

impl<'a> QsFieldContext<'a> {
    /// Same field, another operation.
    #[must_use]
    pub fn with_operation_name(self, operation_name: &'static str) -> Self {
        Self {
            operation_name,
            ..self
        }
    }

    /// Method name part for the current operation.
    pub fn on_field_method(&self, field_first: bool) -> OnFieldMethod {
        OnFieldMethod {
            operation: self.operation_name,
            field: self.field.name_str(),
            field_first
        }
    }

    /// Return/body part for a method returning the QuerySet.
    pub fn chained(&self) -> Chained {
        Chained
    }

    /// Argument identifier derived from the field name.
    pub fn arg_name(&self) -> Ident {
        Ident::new(&field_name_to_arg_name(&self.field.name_str()), Span::call_site())
    }

    /// Type compared against (`T` for `Option<T>`).
    pub fn arg_type(&self) -> &'a Type {
        &self.field.kind.value_ty
    }

    /// Column name literal.
    pub fn column(&self) -> LitStr {
        LitStr::new(&self.field.column, Span::call_site())
    }

    /// Relation name literal, the field name for preloads.
    pub fn relation(&self) -> LitStr {
        LitStr::new(&self.field.name_str(), Span::call_site())
    }

    /// Trailing doc paragraph with the field's own doc summary.
    pub fn doc_suffix(&self) -> String {
        self.field
            .doc
            .as_ref()
            .map(|doc| format!("\n\nField: {doc}"))
            .unwrap_or_default()
    }
}
