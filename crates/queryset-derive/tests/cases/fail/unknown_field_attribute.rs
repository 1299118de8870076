// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use queryset_derive::QuerySet;

#[derive(QuerySet)]
pub struct User {
    #[queryset(indexed)]
    pub id: i64
}

fn main() {}
