// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use queryset_derive::QuerySet;

#[derive(QuerySet)]
pub struct User {
    pub name: String,
    #[queryset(column = "name")]
    pub display_name: String
}

fn main() {}
