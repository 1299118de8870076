// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use queryset_derive::{QuerySet, Value};

#[derive(QuerySet)]
pub struct Account {
    pub id: i64,
    pub email: Option<String>,
    pub balance: i64
}

#[derive(QuerySet)]
#[queryset(updater = false)]
pub struct AuditLog {
    pub id: i64,
    pub message: String
}

fn main() {
    let updater = Account::query_set(())
        .balance_lt(0)
        .get_updater()
        .set_balance(0)
        .set_email(None)
        .set_balance(10);

    assert_eq!(
        updater.assignments(),
        &[("balance", Value::Int(10)), ("email", Value::Null)]
    );

    let logs = AuditLog::query_set(()).message_like("%error%".to_string());
    assert_eq!(logs.into_db().scope().conditions.len(), 1);
}
