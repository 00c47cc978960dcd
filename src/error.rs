// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation in the crate.

/// Errors returned by Hijri calendar construction and conversion.
///
/// All operations are pure, so none of these are transient: a failed call
/// produces no partial moment and retrying it yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HijriError {
    /// Month number outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// Day number outside the bounds of its month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The rejected day number.
        day: u32,
        /// Month the day was checked against.
        month: u32,
        /// Largest day accepted for that month.
        max_day: u32,
    },

    /// The elapsed-month index is not covered by the Umm al-Qura table.
    #[error("month index {index} is outside Umm al-Qura coverage {min}..={max}")]
    OutOfRange {
        /// Elapsed-month index that was requested.
        index: i64,
        /// First covered index.
        min: i64,
        /// Last covered index.
        max: i64,
    },

    /// A constructor requiring a time zone received none.
    #[error("a time zone reference is required")]
    MissingZoneReference,

    /// Clock fields do not form a valid time of day.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second:02}.{nanosecond:09}")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    },

    /// A Unix timestamp outside chrono's representable range.
    #[error("timestamp {seconds}s {nanoseconds}ns is out of range")]
    TimestampOutOfRange { seconds: i64, nanoseconds: u32 },

    /// The converted wall-clock time does not exist in the target zone.
    #[error("{year:04}-{month:02}-{day:02} has no such local time in the target zone")]
    NonexistentLocalTime { year: i32, month: u32, day: u32 },

    /// The looked-up day lies outside chrono's proleptic Gregorian range.
    #[error("gregorian date {year}-{month:02}-{day:02} is not representable")]
    GregorianOutOfRange { year: i32, month: u32, day: u32 },

    /// A calendar shift leaves chrono's representable range.
    #[error("shifting by {years}y {months}m {days}d is out of range")]
    ShiftOutOfRange { years: i32, months: i32, days: i64 },

    /// An injected Umm al-Qura table violates the table contract.
    #[error("malformed Umm al-Qura table: {reason}")]
    MalformedTable {
        /// What the table got wrong.
        reason: String,
    },
}
