// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | No | snake-case struct name | Database table name |
//! | `updater` | No | `true` | Generate `{Struct}Updater` and `get_updater` |
//!
//! ```rust,ignore
//! #[derive(QuerySet)]
//! #[queryset(table = "users", updater = false)]
//! pub struct User { ... }
//! ```

use std::collections::HashMap;

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident, Visibility};

use super::field::FieldDef;
use crate::utils::naming::{column_const_name, to_db_name};

fn default_updater() -> bool {
    true
}

/// Struct-level attributes parsed from `#[queryset(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(queryset), supports(struct_named))]
struct ModelAttrs {
    ident: Ident,

    vis: Visibility,

    #[darling(default)]
    table: Option<String>,

    #[darling(default = "default_updater")]
    updater: bool
}

/// Complete parsed struct definition.
///
/// This is the data structure passed to all code generators.
#[derive(Debug)]
pub struct ModelDef {
    /// Struct identifier (e.g., `User`).
    pub ident: Ident,

    /// Struct visibility, propagated to generated types.
    pub vis: Visibility,

    /// Database table name.
    pub table: String,

    /// Whether to generate the updater type.
    pub updater: bool,

    /// All field definitions, in declaration order.
    pub fields: Vec<FieldDef>
}

impl ModelDef {
    /// Parse a struct definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple or unit struct
    /// - Applied to a generic struct
    /// - Invalid struct or field attributes
    /// - Empty `table`
    /// - Two fields mapped to the same column
    /// - Two columns mapped to the same schema constant
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = ModelAttrs::from_derive_input(input)?;

        let syn::Data::Struct(data) = &input.data else {
            return Err(
                darling::Error::custom("QuerySet can only be derived for structs")
                    .with_span(&input.ident)
            );
        };
        let syn::Fields::Named(named) = &data.fields else {
            return Err(
                darling::Error::custom("QuerySet requires named fields").with_span(&input.ident)
            );
        };

        if !input.generics.params.is_empty() {
            return Err(darling::Error::custom(
                "QuerySet cannot be derived for generic structs"
            )
            .with_span(&input.generics));
        }

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = named
            .named
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .collect();

        let mut seen: HashMap<&str, &Ident> = HashMap::new();
        let mut consts: HashMap<String, &Ident> = HashMap::new();
        for field in fields.iter().filter(|f| f.is_column()) {
            if let Some(first) = seen.insert(field.column.as_str(), &field.ident) {
                errors.push(
                    darling::Error::custom(format!(
                        "column `{}` is already used by field `{}`",
                        field.column, first
                    ))
                    .with_span(&field.ident)
                );
                continue;
            }
            let name = column_const_name(&field.column);
            if let Some(first) = consts.get(&name) {
                errors.push(
                    darling::Error::custom(format!(
                        "column `{}` maps to schema constant `{}` already used by field `{}`",
                        field.column, name, first
                    ))
                    .with_span(&field.ident)
                );
            } else {
                consts.insert(name, &field.ident);
            }
        }

        let table = match attrs.table {
            Some(table) if table.is_empty() => {
                errors.push(
                    darling::Error::custom("table name must not be empty").with_span(&attrs.ident)
                );
                table
            }
            Some(table) => table,
            None => to_db_name(&attrs.ident.to_string())
        };

        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            table,
            updater: attrs.updater,
            fields
        })
    }

    /// Get the struct name.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Fields that map to columns.
    pub fn column_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_column())
    }

    /// Column names in declaration order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.column_fields().map(|f| f.column.as_str()).collect()
    }
}
