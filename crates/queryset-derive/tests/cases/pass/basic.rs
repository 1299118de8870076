// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use queryset_derive::{Model, QuerySet};

#[derive(QuerySet, Debug, Clone)]
#[queryset(table = "users")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub active: bool
}

fn main() {
    let qs = User::query_set(())
        .name_eq("ann".to_string())
        .id_in(1, [2, 3])
        .email_is_null()
        .active_ne(false)
        .order_desc_by_id()
        .limit(10)
        .offset(5);

    let scope = qs.db().scope();
    assert_eq!(scope.table, "users");
    assert_eq!(scope.conditions.len(), 4);
    assert_eq!(scope.orders.len(), 1);
    assert_eq!(scope.limit, Some(10));
    assert_eq!(scope.offset, Some(5));

    assert_eq!(User::TABLE, "users");
    assert_eq!(User::COLUMNS, &["id", "name", "email", "active"]);
    assert_eq!(UserDbSchema::NAME.as_str(), "name");
    assert_eq!(UserDbSchema::fields().len(), 4);
}
