// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bind values carried by query clauses.
//!
//! Generated filter methods take the field's own Rust type and convert it
//! into a [`Value`] before handing it to [`Db::where_`](crate::Db::where_).
//! Executors turn values back into driver-specific binds.
//!
//! # Conversions
//!
//! | Rust type | Value |
//! |-----------|-------|
//! | `bool` | `Bool` |
//! | `i8`..`i64`, `isize` | `Int` |
//! | `u8`..`u64`, `usize` | `UInt` |
//! | `i128`, `u128` | `Numeric` |
//! | `f32`, `f64` | `Float` |
//! | `String`, `&str`, `char` | `Text` |
//! | `Vec<u8>`, `&[u8]` | `Bytes` |
//! | `Option<T>` | `Null` or `T`'s value |
//! | `Vec<Value>` | `List` |
//! | `uuid::Uuid` | `Uuid` (feature `uuid`) |
//! | `chrono` date/time types, `SystemTime` | `Timestamp` / `Date` / ... (feature `chrono`) |
//! | `time` date/time types | `OffsetDateTime` / ... (feature `time`) |
//! | `rust_decimal::Decimal` | `Decimal` (feature `rust_decimal`) |
//!
//! `DateTime<Tz>` in any time zone is normalized to UTC.

/// A single bind value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`.
    Null,

    /// Boolean.
    Bool(bool),

    /// Signed integer.
    Int(i64),

    /// Unsigned integer.
    UInt(u64),

    /// Floating point number.
    Float(f64),

    /// Text.
    Text(String),

    /// Raw bytes.
    Bytes(Vec<u8>),

    /// Exact number too wide for `Int`/`UInt`, in decimal notation.
    ///
    /// Rendered as `$n::numeric` on PostgreSQL so the text bind is compared
    /// as a number.
    Numeric(String),

    /// List of values. Expanded to one placeholder per element when the
    /// statement is rendered, so `"id" IN (?)` becomes `"id" IN ($1, $2)`.
    List(Vec<Value>),

    /// UUID.
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),

    /// Timestamp with time zone.
    #[cfg(feature = "chrono")]
    Timestamp(chrono::DateTime<chrono::Utc>),

    /// Timestamp without time zone.
    #[cfg(feature = "chrono")]
    NaiveTimestamp(chrono::NaiveDateTime),

    /// Calendar date.
    #[cfg(feature = "chrono")]
    Date(chrono::NaiveDate),

    /// Time of day.
    #[cfg(feature = "chrono")]
    Time(chrono::NaiveTime),

    /// `time` timestamp with offset.
    #[cfg(feature = "time")]
    OffsetDateTime(time::OffsetDateTime),

    /// `time` timestamp without offset.
    #[cfg(feature = "time")]
    PrimitiveDateTime(time::PrimitiveDateTime),

    /// `time` calendar date.
    #[cfg(feature = "time")]
    TimeDate(time::Date),

    /// `time` time of day.
    #[cfg(feature = "time")]
    TimeOfDay(time::Time),

    /// Arbitrary precision decimal.
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal)
}

impl Value {
    /// Check if this value is `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from!(Int as i64: i8, i16, i32, i64);
impl_from!(UInt as u64: u8, u16, u32, u64);
impl_from!(Float as f64: f32, f64);
impl_from!(Bool as bool: bool);
impl_from!(Text as String: String, &str, char);
impl_from!(Bytes as Vec<u8>: Vec<u8>, &[u8]);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Self::Numeric(value.to_string())
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        Self::Numeric(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Value {
    fn from(value: uuid::Uuid) -> Self {
        Self::Uuid(value)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Value {
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Self::Timestamp(value.with_timezone(&chrono::Utc))
    }
}

#[cfg(feature = "chrono")]
impl From<std::time::SystemTime> for Value {
    fn from(value: std::time::SystemTime) -> Self {
        Self::Timestamp(chrono::DateTime::<chrono::Utc>::from(value))
    }
}

#[cfg(all(feature = "time", not(feature = "chrono")))]
impl From<std::time::SystemTime> for Value {
    fn from(value: std::time::SystemTime) -> Self {
        Self::OffsetDateTime(time::OffsetDateTime::from(value))
    }
}

#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Value {
    fn from(value: time::OffsetDateTime) -> Self {
        Self::OffsetDateTime(value)
    }
}

#[cfg(feature = "time")]
impl From<time::PrimitiveDateTime> for Value {
    fn from(value: time::PrimitiveDateTime) -> Self {
        Self::PrimitiveDateTime(value)
    }
}

#[cfg(feature = "time")]
impl From<time::Date> for Value {
    fn from(value: time::Date) -> Self {
        Self::TimeDate(value)
    }
}

#[cfg(feature = "time")]
impl From<time::Time> for Value {
    fn from(value: time::Time) -> Self {
        Self::TimeOfDay(value)
    }
}

#[cfg(feature = "rust_decimal")]
impl From<rust_decimal::Decimal> for Value {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::Decimal(value)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Value {
    fn from(value: chrono::NaiveDateTime) -> Self {
        Self::NaiveTimestamp(value)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Value {
    fn from(value: chrono::NaiveDate) -> Self {
        Self::Date(value)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveTime> for Value {
    fn from(value: chrono::NaiveTime) -> Self {
        Self::Time(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen() {
        assert_eq!(Value::from(7_i16), Value::Int(7));
        assert_eq!(Value::from(7_u8), Value::UInt(7));
        assert_eq!(Value::from(-3_isize), Value::Int(-3));
    }

    #[test]
    fn option_maps_none_to_null() {
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from(Some("a")), Value::Text("a".to_string()));
    }

    #[test]
    fn wide_integers_are_numeric_text() {
        assert_eq!(
            Value::from(i128::MIN),
            Value::Numeric("-170141183460469231731687303715884105728".to_string())
        );
        assert_eq!(
            Value::from(u128::from(u64::MAX) + 1),
            Value::Numeric("18446744073709551616".to_string())
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn offset_datetime_is_normalized_to_utc() {
        use chrono::{FixedOffset, TimeZone, Utc};

        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let utc = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        assert_eq!(Value::from(local), Value::Timestamp(utc));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn system_time_is_a_timestamp() {
        let value = Value::from(std::time::SystemTime::UNIX_EPOCH);
        let epoch = chrono::DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(value, Value::Timestamp(epoch));
    }
}
