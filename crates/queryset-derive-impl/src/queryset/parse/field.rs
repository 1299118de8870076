// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[queryset(skip)]` | No methods, not selected |
//! | `#[queryset(column = "user_name")]` | Explicit column name |
//! | `#[queryset(preload)]` | Relation: only `preload_{field}` is generated |
//! | `#[queryset(ordered)]` | Comparison filters on a non-numeric type |
//!
//! Keys can be combined: `#[queryset(column = "ts", ordered)]`.

mod kind;

pub use kind::FieldKind;
use syn::{Attribute, Field, Ident, LitStr, Type};

use crate::utils::{docs::extract_doc_summary, naming::to_db_name};

/// Options from field-level `#[queryset(...)]` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfig {
    /// Exclude the field from generation.
    pub skip: bool,

    /// Relation field loaded with `preload`.
    pub preload: bool,

    /// Force comparison filters.
    pub ordered: bool,

    /// Explicit column name.
    pub column: Option<String>
}

impl FieldConfig {
    /// Merge one `#[queryset(...)]` attribute into the config.
    ///
    /// # Errors
    ///
    /// Unknown keys, a non-string `column` value and `preload` combined with
    /// `column`.
    pub fn merge_attr(&mut self, attr: &Attribute) -> darling::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                self.skip = true;
            } else if meta.path.is_ident("preload") {
                self.preload = true;
            } else if meta.path.is_ident("ordered") {
                self.ordered = true;
            } else if meta.path.is_ident("column") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(meta.error("column name must not be empty"));
                }
                self.column = Some(value.value());
            } else {
                return Err(meta.error("unknown queryset field attribute"));
            }
            Ok(())
        })?;

        if self.preload && self.column.is_some() {
            return Err(darling::Error::custom(
                "`preload` fields are relations and cannot have a `column`"
            )
            .with_span(attr));
        }
        Ok(())
    }
}

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type.
    pub ty: Type,

    /// Database column name.
    pub column: String,

    /// Type classification.
    pub kind: FieldKind,

    /// Parsed `#[queryset(...)]` options.
    pub config: FieldConfig,

    /// First line of the field's doc comment.
    pub doc: Option<String>
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns error if the field has no identifier or its attributes are
    /// invalid.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("QuerySet fields must be named").with_span(field)
        })?;

        let mut config = FieldConfig::default();
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("queryset")) {
            config.merge_attr(attr)?;
        }

        let column = config
            .column
            .clone()
            .unwrap_or_else(|| to_db_name(&ident.to_string()));

        Ok(Self {
            kind: FieldKind::of(&field.ty),
            ty: field.ty.clone(),
            doc: extract_doc_summary(&field.attrs),
            ident,
            column,
            config
        })
    }

    /// Field name without the raw-identifier prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        crate::utils::naming::unraw(&self.ident.to_string()).to_string()
    }

    /// Check if the field maps to a selected column.
    #[must_use]
    pub fn is_column(&self) -> bool {
        !self.config.skip && !self.config.preload
    }

    /// Check if the field is a preloadable relation.
    #[must_use]
    pub fn is_preload(&self) -> bool {
        !self.config.skip && self.config.preload
    }

    /// Check if comparison filters are generated.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.kind.ordered || self.config.ordered
    }
}
