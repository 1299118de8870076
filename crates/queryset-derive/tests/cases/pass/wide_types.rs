// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::time::SystemTime;

use chrono::{DateTime, FixedOffset};
use queryset_derive::{QuerySet, Value};

#[derive(QuerySet)]
pub struct Ledger {
    pub id: i64,
    pub total: i128,
    pub limit_cents: Option<u128>,
    pub booked_at: DateTime<FixedOffset>,
    pub observed: SystemTime
}

fn main() {
    let booked = DateTime::parse_from_rfc3339("2024-05-01T12:00:00+03:00").unwrap();

    let qs = Ledger::query_set(())
        .total_gt(i128::MAX - 1)
        .limit_cents_in(1, [2])
        .booked_at_gte(booked)
        .observed_lt(SystemTime::now());

    let conditions = &qs.db().scope().conditions;
    assert_eq!(conditions.len(), 4);
    assert_eq!(
        conditions[0].args,
        vec![Value::Numeric((i128::MAX - 1).to_string())]
    );
    assert_eq!(
        conditions[2].args,
        vec![Value::Timestamp(booked.with_timezone(&chrono::Utc))]
    );

    let updater = qs.get_updater().set_limit_cents(None).set_total(5);
    assert_eq!(
        updater.assignments(),
        &[("limit_cents", Value::Null), ("total", Value::Numeric("5".to_string()))]
    );
}
