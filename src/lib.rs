// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hijri Calendar
//!
//! Bidirectional conversion between Gregorian moments and the Hijri
//! (Islamic lunar) calendar.
//!
//! # Directions
//!
//! The two directions use different methods and are **not** exact inverses:
//!
//! | Direction | Method | Range |
//! |-----------|--------|-------|
//! | Gregorian → Hijri | arithmetic 30-year-cycle reckoning ([`gregorian_to_hijri`]) | unbounded |
//! | Hijri → Gregorian | Umm al-Qura table lookup ([`HijriToGregorian`], [`hijri_to_gregorian`]) | table coverage |
//!
//! A round trip agrees to within one or two days.
//!
//! # Core types
//!
//! - [`HijriDate`]: `(year, month, day)` in the Hijri calendar.
//! - [`HijriDateTime<Tz>`]: a Hijri date with wall-clock time, zone and weekday.
//! - [`HijriMonth`] / [`HijriWeekday`]: named months and Saturday-first weekdays.
//! - [`MonthTable`]: tabular month lengths, with [`MONTH_TABLE`] as the shared instance.
//! - [`UmmAlQuraIndex`]: authoritative observed month starts.
//! - [`DayNumber<S>`]: a day count on a [`DayScale`].
//!
//! # Day scales
//!
//! | Marker | Zero point |
//! |--------|------------|
//! | [`JDN`] | Julian Day Number 0 |
//! | [`MJDN`] | JDN 2 400 000 |
//! | [`HijriEpoch`] | JDN 1 948 084 |
//!
//! # Features
//!
//! * `ummalqura-data` (default): embeds the 1356 AH – 1500 AH table and
//!   enables [`UmmAlQuraIndex::embedded`] and [`hijri_to_gregorian`].
//! * `serde`: `Serialize`/`Deserialize` for the value types.

pub mod arithmetic;
pub mod civil;
mod date;
pub(crate) mod day_number;
mod error;
mod month;
pub(crate) mod scales;
pub mod tabulated;
pub mod ummalqura;
#[cfg(feature = "ummalqura-data")]
mod ummalqura_data;
mod weekday;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use arithmetic::{
    checked_civil_to_hijri, checked_gregorian_to_hijri, civil_to_hijri, gregorian_to_hijri,
    hijri_date_from_jdn,
};
pub use civil::CivilDate;
pub use date::{umm_al_qura_offset, HijriDate, HijriDateTime, MAX_MONTH_DAYS};
pub use day_number::{DayNumber, DayScale};
pub use error::HijriError;
pub use month::{
    hijri_month_length, is_hijri_leap_year, HijriMonth, MonthTable, MonthTableEntry, MONTH_TABLE,
};
pub use scales::{HijriEpoch, JDN, MJDN};
#[cfg(feature = "ummalqura-data")]
pub use tabulated::hijri_to_gregorian;
pub use tabulated::HijriToGregorian;
pub use ummalqura::UmmAlQuraIndex;
pub use weekday::{gregorian_weekday_of, weekday_of, HijriWeekday};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Day Number: integral days since the start of the Julian Period.
///
/// This is a type alias for [`DayNumber<JDN>`].
pub type JulianDayNumber = DayNumber<JDN>;

/// Modified day number: `JDN − 2 400 000`, the unit of the Umm al-Qura table.
///
/// This is a type alias for [`DayNumber<MJDN>`].
pub type ModifiedDayNumber = DayNumber<MJDN>;
