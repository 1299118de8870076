// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, NaiveDate, Utc};
use queryset_derive::QuerySet;

#[derive(QuerySet)]
pub struct Event {
    pub id: u32,
    pub score: f64,
    pub title: String,
    pub note: Option<String>,
    pub happened_at: DateTime<Utc>,
    pub day: Option<NaiveDate>,
    #[queryset(ordered)]
    pub code: String
}

fn main() {
    let now = Utc::now();
    let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

    let qs = Event::query_set(())
        .id_gt(3)
        .score_lte(0.5)
        .title_like("launch%".to_string())
        .note_not_like("%draft%".to_string())
        .note_is_not_null()
        .happened_at_lt(now)
        .day_gte(day)
        .day_is_null()
        .code_gt("A".to_string())
        .order_asc_by_happened_at();

    assert_eq!(qs.db().scope().conditions.len(), 9);
}
