// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Hijri → Gregorian (Umm al-Qura lookup)
//!
//! The day number of a Hijri date is read from an [`UmmAlQuraIndex`]:
//!
//! ```text
//! MJDN = day + off(index(year, month))
//! JDN  = MJDN + 2 400 000
//! ```
//!
//! and reduced to a proleptic Gregorian date. The wall-clock time and zone
//! of the input are reattached unchanged.
//!
//! Dates outside the index coverage fail with [`HijriError::OutOfRange`];
//! there is no arithmetic fallback.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use qtty::Days;
use tracing::trace;

use super::civil::CivilDate;
use super::date::{HijriDate, HijriDateTime};
use super::day_number::DayNumber;
use super::scales::{JDN, MJDN};
use super::ummalqura::UmmAlQuraIndex;
use super::weekday::{weekday_of, HijriWeekday};
use crate::HijriError;

/// Converts Hijri dates to Gregorian through a borrowed month index.
#[derive(Debug, Copy, Clone)]
pub struct HijriToGregorian<'a> {
    index: &'a UmmAlQuraIndex,
}

impl<'a> HijriToGregorian<'a> {
    #[inline]
    pub fn new(index: &'a UmmAlQuraIndex) -> Self {
        Self { index }
    }

    /// Converter over the embedded table.
    #[cfg(feature = "ummalqura-data")]
    #[inline]
    pub fn embedded() -> HijriToGregorian<'static> {
        HijriToGregorian::new(UmmAlQuraIndex::embedded())
    }

    /// The index lookups go through.
    #[inline]
    pub fn index(&self) -> &'a UmmAlQuraIndex {
        self.index
    }

    /// Julian Day Number of `date`.
    ///
    /// # Errors
    ///
    /// * [`HijriError::OutOfRange`] if the month is not covered.
    /// * [`HijriError::InvalidDay`] if the day exceeds the observed length
    ///   of the month.
    pub fn jdn(&self, date: &HijriDate) -> Result<DayNumber<JDN>, HijriError> {
        let index = date.month_index();
        let offset = self.index.day_offset(index)?;
        let max_day = self.index.month_length(index)?;
        if date.day() == 0 || date.day() > max_day {
            return Err(HijriError::InvalidDay {
                day: date.day(),
                month: date.month().number(),
                max_day,
            });
        }

        let mjdn = DayNumber::<MJDN>::from_days(Days::new(f64::from(date.day())) + offset);
        trace!(index, mjdn = mjdn.value(), "umm al-qura lookup");
        Ok(mjdn.to::<JDN>())
    }

    /// Proleptic Gregorian date of `date`.
    ///
    /// # Errors
    ///
    /// The errors of [`jdn`](Self::jdn), and
    /// [`HijriError::GregorianOutOfRange`] when the day number lies beyond
    /// what `NaiveDate` can hold.
    pub fn gregorian_date(&self, date: &HijriDate) -> Result<NaiveDate, HijriError> {
        let civil = CivilDate::gregorian_from_jdn(self.jdn(date)?);
        NaiveDate::from_ymd_opt(civil.year, civil.month, civil.day).ok_or(
            HijriError::GregorianOutOfRange {
                year: civil.year,
                month: civil.month,
                day: civil.day,
            },
        )
    }

    /// Weekday on which `date` falls under the observed calendar.
    ///
    /// # Errors
    ///
    /// See [`jdn`](Self::jdn).
    pub fn weekday(&self, date: &HijriDate) -> Result<HijriWeekday, HijriError> {
        Ok(weekday_of(self.jdn(date)?.weekday()))
    }

    /// Gregorian moment of `moment`, keeping its time of day and zone.
    ///
    /// # Errors
    ///
    /// The errors of [`jdn`](Self::jdn), and
    /// [`HijriError::NonexistentLocalTime`] when the wall-clock time falls in
    /// a gap of the zone. Ambiguous local times resolve to the earlier one.
    pub fn convert<Tz: TimeZone>(
        &self,
        moment: &HijriDateTime<Tz>,
    ) -> Result<DateTime<Tz>, HijriError> {
        let date = self.gregorian_date(&moment.date())?;
        let local = date.and_time(moment.time());
        moment
            .timezone()
            .from_local_datetime(&local)
            .earliest()
            .ok_or(HijriError::NonexistentLocalTime {
                year: date.year(),
                month: date.month(),
                day: date.day(),
            })
    }
}

/// Convert a Hijri moment to the Gregorian calendar using the embedded
/// Umm al-Qura table.
///
/// ## Quick Example
/// ```rust
/// use chrono::{Datelike, Utc};
/// use hijri::{hijri_to_gregorian, HijriDateTime};
///
/// let ramadan = HijriDateTime::from_parts(1445, 9, 1, 0, 0, 0, 0, Some(Utc)).unwrap();
/// let gregorian = hijri_to_gregorian(&ramadan).unwrap();
/// assert_eq!((gregorian.year(), gregorian.month(), gregorian.day()), (2024, 3, 11));
/// ```
///
/// # Errors
///
/// See [`HijriToGregorian::convert`].
#[cfg(feature = "ummalqura-data")]
pub fn hijri_to_gregorian<Tz: TimeZone>(
    moment: &HijriDateTime<Tz>,
) -> Result<DateTime<Tz>, HijriError> {
    HijriToGregorian::embedded().convert(moment)
}
