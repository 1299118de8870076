// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the QuerySet derive macro.
//!
//! Struct-level `#[queryset(...)]` is parsed with [`darling`]; field-level
//! `#[queryset(...)]` uses `syn`'s nested meta parser because its keys are
//! mostly markers.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── model.rs       - Struct-level parsing (ModelDef, ModelAttrs)
//! └── field.rs       - Field-level parsing (FieldDef, FieldConfig)
//!     └── kind.rs    - Field type classification (FieldKind)
//! ```
//!
//! # Data Structures
//!
//! ```text
//! ModelDef
//! ├── ident: Ident          (struct name, e.g., "User")
//! ├── vis: Visibility       (propagated to generated types)
//! ├── table: String         (explicit or derived from the struct name)
//! ├── updater: bool         (emit {Struct}Updater)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident      (field name)
//!         ├── ty: Type          (declared type)
//!         ├── column: String    (database column)
//!         ├── kind: FieldKind   (nullable / ordered / textual)
//!         └── config: FieldConfig (skip, preload, ordered, column)
//! ```

mod field;
mod model;

pub use field::FieldDef;
pub use model::ModelDef;

#[cfg(test)]
mod tests;
