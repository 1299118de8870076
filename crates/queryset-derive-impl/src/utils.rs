// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`docs`] — Doc comment extraction for generated method docs
//! - [`naming`] — Naming lookup tables and conversions

pub mod docs;
pub mod naming;
