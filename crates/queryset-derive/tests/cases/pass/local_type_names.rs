// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use queryset_derive::{QuerySet, Value};

/// Single-letter type in scope at the derive site.
#[derive(Clone, Copy)]
pub struct E(pub i64);

impl From<E> for Value {
    fn from(value: E) -> Self {
        Value::Int(value.0)
    }
}

#[derive(QuerySet)]
pub struct Reading {
    pub id: i64,
    pub level: E,
    pub previous: Option<E>
}

fn main() {
    let qs = Reading::query_set(()).level_eq(E(3)).previous_is_null();

    let conditions = &qs.db().scope().conditions;
    assert_eq!(conditions.len(), 2);
    assert_eq!(conditions[0].args, vec![Value::Int(3)]);

    let updater = qs.get_updater().set_previous(Some(E(2)));
    assert_eq!(updater.assignments(), &[("previous", Value::Int(2))]);
}
