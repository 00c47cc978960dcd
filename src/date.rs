// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hijri dates and moments.
//!
//! [`HijriDate`] is the bare `(year, month, day)` triple. [`HijriDateTime`]
//! adds the wall-clock time and time zone carried over from the Gregorian
//! moment it was converted from, plus the weekday when it is known.

use chrono::{DateTime, FixedOffset, Months, NaiveTime, TimeDelta, TimeZone, Timelike};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::month::{is_hijri_leap_year, HijriMonth, MONTH_TABLE};
use super::ummalqura::UmmAlQuraIndex;
use super::weekday::HijriWeekday;
use crate::HijriError;

/// Longest possible Hijri month.
pub const MAX_MONTH_DAYS: u32 = 30;

/// Fixed UTC+03:00 offset of Mecca, the reference zone of the Umm al-Qura
/// calendar.
pub fn umm_al_qura_offset() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).expect("UTC+03:00 is within ±24h")
}

// ═══════════════════════════════════════════════════════════════════════════
// HijriDate
// ═══════════════════════════════════════════════════════════════════════════

/// A Hijri calendar date.
///
/// Ordering is lexicographic on `(year, month, day)`.
///
/// Dates built with [`HijriDate::new`] have a month in `1..=12` and a day in
/// `1..=30`. Dates produced by the arithmetic reckoning carry the raw
/// algorithm output and should pass [`HijriDate::validate_tabular`] before
/// being trusted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HijriDate {
    year: i32,
    month: HijriMonth,
    day: u32,
}

impl HijriDate {
    /// Create a date from its numeric fields.
    ///
    /// # Errors
    ///
    /// [`HijriError::InvalidMonth`] outside `1..=12`;
    /// [`HijriError::InvalidDay`] outside `1..=30`.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, HijriError> {
        let month = HijriMonth::from_number(month)?;
        if !(1..=MAX_MONTH_DAYS).contains(&day) {
            return Err(HijriError::InvalidDay {
                day,
                month: month.number(),
                max_day: MAX_MONTH_DAYS,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Assemble a date without range checks.
    #[inline]
    pub(crate) const fn from_parts(year: i32, month: HijriMonth, day: u32) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> HijriMonth {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Whether the year is a leap year under the tabular rule.
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        is_hijri_leap_year(self.year)
    }

    /// Check the day against the tabular month length for this year.
    ///
    /// # Errors
    ///
    /// [`HijriError::InvalidDay`] if the day is 0 or exceeds
    /// `MONTH_TABLE.length(month, is_leap_year(year))`.
    pub fn validate_tabular(&self) -> Result<(), HijriError> {
        let max_day = MONTH_TABLE.length(self.month, self.is_leap_year());
        if self.day == 0 || self.day > max_day {
            return Err(HijriError::InvalidDay {
                day: self.day,
                month: self.month.number(),
                max_day,
            });
        }
        Ok(())
    }

    /// Elapsed-month index of this date's month in the Umm al-Qura table.
    #[inline]
    pub fn month_index(&self) -> i64 {
        UmmAlQuraIndex::month_index(self.year, self.month)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HijriDateTime
// ═══════════════════════════════════════════════════════════════════════════

/// A moment expressed in the Hijri calendar.
///
/// The time of day and zone are carried unchanged from the Gregorian moment
/// this was converted from, or supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct HijriDateTime<Tz: TimeZone> {
    date: HijriDate,
    time: NaiveTime,
    zone: Tz,
    weekday: Option<HijriWeekday>,
}

impl<Tz: TimeZone> HijriDateTime<Tz> {
    /// Create a moment from a date, a time of day and a zone.
    ///
    /// The weekday is unknown until the moment is converted.
    ///
    /// # Errors
    ///
    /// [`HijriError::MissingZoneReference`] if `zone` is `None`.
    pub fn new(date: HijriDate, time: NaiveTime, zone: Option<Tz>) -> Result<Self, HijriError> {
        let zone = zone.ok_or(HijriError::MissingZoneReference)?;
        Ok(Self {
            date,
            time,
            zone,
            weekday: None,
        })
    }

    /// Create a moment from numeric fields.
    ///
    /// # Errors
    ///
    /// [`HijriError::MissingZoneReference`] if `zone` is `None`, otherwise
    /// the errors of [`HijriDate::new`] and [`HijriError::InvalidTime`] for
    /// clock fields that do not form a time of day.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
        zone: Option<Tz>,
    ) -> Result<Self, HijriError> {
        let zone = zone.ok_or(HijriError::MissingZoneReference)?;
        let date = HijriDate::new(year, month, day)?;
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanosecond).ok_or(
            HijriError::InvalidTime {
                hour,
                minute,
                second,
                nanosecond,
            },
        )?;
        Self::new(date, time, Some(zone))
    }

    /// Assemble a converted moment.
    #[inline]
    pub(crate) fn from_converted(
        date: HijriDate,
        time: NaiveTime,
        zone: Tz,
        weekday: HijriWeekday,
    ) -> Self {
        Self {
            date,
            time,
            zone,
            weekday: Some(weekday),
        }
    }

    /// Moment of a Unix timestamp, shown in `zone`.
    ///
    /// # Errors
    ///
    /// [`HijriError::MissingZoneReference`] if `zone` is `None`;
    /// [`HijriError::TimestampOutOfRange`] if chrono cannot represent it.
    pub fn from_timestamp(
        seconds: i64,
        nanoseconds: u32,
        zone: Option<Tz>,
    ) -> Result<Self, HijriError> {
        let zone = zone.ok_or(HijriError::MissingZoneReference)?;
        let utc = DateTime::from_timestamp(seconds, nanoseconds).ok_or(
            HijriError::TimestampOutOfRange {
                seconds,
                nanoseconds,
            },
        )?;
        Ok(super::arithmetic::gregorian_to_hijri(&utc.with_timezone(&zone)))
    }

    /// Gregorian moment through the given Umm al-Qura index.
    ///
    /// # Errors
    ///
    /// See [`HijriToGregorian::convert`](super::tabulated::HijriToGregorian::convert).
    pub fn to_gregorian(&self, index: &UmmAlQuraIndex) -> Result<DateTime<Tz>, HijriError> {
        super::tabulated::HijriToGregorian::new(index).convert(self)
    }

    /// Unix timestamp (seconds) through the given Umm al-Qura index.
    ///
    /// # Errors
    ///
    /// See [`HijriDateTime::to_gregorian`].
    pub fn timestamp_in(&self, index: &UmmAlQuraIndex) -> Result<i64, HijriError> {
        Ok(self.to_gregorian(index)?.timestamp())
    }

    /// Unix timestamp in nanoseconds through the given Umm al-Qura index.
    ///
    /// # Errors
    ///
    /// The errors of [`HijriDateTime::to_gregorian`], and
    /// [`HijriError::TimestampOutOfRange`] outside the roughly 584 years
    /// around 1970 that fit an `i64` nanosecond count.
    pub fn timestamp_nanos_in(&self, index: &UmmAlQuraIndex) -> Result<i64, HijriError> {
        let moment = self.to_gregorian(index)?;
        moment
            .timestamp_nanos_opt()
            .ok_or(HijriError::TimestampOutOfRange {
                seconds: moment.timestamp(),
                nanoseconds: moment.timestamp_subsec_nanos(),
            })
    }

    /// Moment `delta` later, stepping through the Gregorian calendar.
    ///
    /// The moment is resolved through `index`, shifted, and reckoned back
    /// arithmetically, so the result carries the drift between the two
    /// directions.
    ///
    /// # Errors
    ///
    /// The errors of [`HijriDateTime::to_gregorian`], and
    /// [`HijriError::TimestampOutOfRange`] if the shifted moment cannot be
    /// represented.
    pub fn checked_add_signed(
        &self,
        delta: TimeDelta,
        index: &UmmAlQuraIndex,
    ) -> Result<Self, HijriError> {
        let moment = self.to_gregorian(index)?;
        let shifted = moment
            .clone()
            .checked_add_signed(delta)
            .ok_or(HijriError::TimestampOutOfRange {
                seconds: moment.timestamp().saturating_add(delta.num_seconds()),
                nanoseconds: delta.subsec_nanos().unsigned_abs(),
            })?;
        Ok(super::arithmetic::gregorian_to_hijri(&shifted))
    }

    /// Moment shifted by whole Gregorian years, months and days.
    ///
    /// The moment is resolved through `index`, moved by `years · 12 + months`
    /// calendar months and then by `days` days, and reckoned back
    /// arithmetically. A month step that lands past the end of the target
    /// month clamps to its last day, as chrono does. The wall-clock time is
    /// kept.
    ///
    /// # Errors
    ///
    /// The errors of [`HijriDateTime::to_gregorian`], and
    /// [`HijriError::ShiftOutOfRange`] if the shifted moment cannot be
    /// represented or its wall-clock time does not exist in the zone.
    pub fn checked_add_date(
        &self,
        years: i32,
        months: i32,
        days: i64,
        index: &UmmAlQuraIndex,
    ) -> Result<Self, HijriError> {
        let out_of_range = HijriError::ShiftOutOfRange {
            years,
            months,
            days,
        };
        let moment = self.to_gregorian(index)?;

        let total_months = i64::from(years) * 12 + i64::from(months);
        let step =
            u32::try_from(total_months.unsigned_abs()).map_err(|_| out_of_range.clone())?;
        let moment = if total_months >= 0 {
            moment.checked_add_months(Months::new(step))
        } else {
            moment.checked_sub_months(Months::new(step))
        }
        .ok_or_else(|| out_of_range.clone())?;

        let step = chrono::Days::new(days.unsigned_abs());
        let moment = if days >= 0 {
            moment.checked_add_days(step)
        } else {
            moment.checked_sub_days(step)
        }
        .ok_or(out_of_range)?;

        Ok(super::arithmetic::gregorian_to_hijri(&moment))
    }

    /// The same wall-clock time one Gregorian day later.
    ///
    /// # Errors
    ///
    /// See [`HijriDateTime::checked_add_date`].
    #[inline]
    pub fn tomorrow(&self, index: &UmmAlQuraIndex) -> Result<Self, HijriError> {
        self.checked_add_date(0, 0, 1, index)
    }

    /// The same wall-clock time one Gregorian day earlier.
    ///
    /// # Errors
    ///
    /// See [`HijriDateTime::checked_add_date`].
    #[inline]
    pub fn yesterday(&self, index: &UmmAlQuraIndex) -> Result<Self, HijriError> {
        self.checked_add_date(0, 0, -1, index)
    }

    #[inline]
    pub fn date(&self) -> HijriDate {
        self.date
    }

    #[inline]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    #[inline]
    pub fn timezone(&self) -> &Tz {
        &self.zone
    }

    /// Weekday, if derived from a Gregorian moment.
    #[inline]
    pub fn weekday(&self) -> Option<HijriWeekday> {
        self.weekday
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year
    }

    #[inline]
    pub fn month(&self) -> HijriMonth {
        self.date.month
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.date.day
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.time.second()
    }

    #[inline]
    pub fn nanosecond(&self) -> u32 {
        self.time.nanosecond()
    }

    /// Hour, minute and second.
    #[inline]
    pub fn clock(&self) -> (u32, u32, u32) {
        (self.hour(), self.minute(), self.second())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for HijriDateTime<Tz> {
    fn from(moment: DateTime<Tz>) -> Self {
        super::arithmetic::gregorian_to_hijri(&moment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn date_new_validates_fields() {
        let date = HijriDate::new(1445, 9, 1).unwrap();
        assert_eq!(
            (date.year(), date.month(), date.day()),
            (1445, HijriMonth::Ramadan, 1)
        );
        assert_eq!(
            HijriDate::new(1445, 13, 1),
            Err(HijriError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            HijriDate::new(1445, 1, 31),
            Err(HijriError::InvalidDay {
                day: 31,
                month: 1,
                max_day: 30
            })
        );
        assert!(HijriDate::new(1445, 1, 0).is_err());
    }

    #[test]
    fn dates_order_lexicographically() {
        let a = HijriDate::new(1444, 12, 30).unwrap();
        let b = HijriDate::new(1445, 1, 1).unwrap();
        let c = HijriDate::new(1445, 1, 2).unwrap();
        let d = HijriDate::new(1445, 2, 1).unwrap();
        assert!(a < b && b < c && c < d);
    }

    #[test]
    fn tabular_validation() {
        // 1445 is a leap year: Ramadan and Dhu al-Hijja have 30 days.
        assert!(HijriDate::new(1445, 9, 30).unwrap().validate_tabular().is_ok());
        assert!(HijriDate::new(1445, 12, 30).unwrap().validate_tabular().is_ok());
        assert_eq!(
            HijriDate::new(1444, 9, 30).unwrap().validate_tabular(),
            Err(HijriError::InvalidDay {
                day: 30,
                month: 9,
                max_day: 29
            })
        );
        assert!(HijriDate::new(1444, 2, 30).unwrap().validate_tabular().is_err());
        assert!(HijriDate::new(1444, 3, 30).unwrap().validate_tabular().is_ok());
    }

    #[test]
    fn month_index_of_date() {
        assert_eq!(HijriDate::new(1445, 9, 17).unwrap().month_index(), 1076);
    }

    #[test]
    fn moment_requires_zone() {
        let date = HijriDate::new(1445, 9, 1).unwrap();
        let err = HijriDateTime::<Utc>::new(date, NaiveTime::MIN, None).unwrap_err();
        assert_eq!(err, HijriError::MissingZoneReference);
        let err = HijriDateTime::<Utc>::from_parts(1445, 9, 1, 0, 0, 0, 0, None).unwrap_err();
        assert_eq!(err, HijriError::MissingZoneReference);
        let err = HijriDateTime::<Utc>::from_timestamp(0, 0, None).unwrap_err();
        assert_eq!(err, HijriError::MissingZoneReference);
    }

    #[test]
    fn moment_from_parts() {
        let moment =
            HijriDateTime::from_parts(1445, 9, 1, 18, 30, 15, 250, Some(umm_al_qura_offset()))
                .unwrap();
        assert_eq!(moment.date(), HijriDate::new(1445, 9, 1).unwrap());
        assert_eq!(moment.clock(), (18, 30, 15));
        assert_eq!(moment.nanosecond(), 250);
        assert_eq!(moment.timezone().local_minus_utc(), 3 * 3600);
        assert_eq!(moment.weekday(), None);
    }

    #[test]
    fn moment_rejects_bad_clock() {
        let err = HijriDateTime::from_parts(1445, 9, 1, 24, 0, 0, 0, Some(Utc)).unwrap_err();
        assert_eq!(
            err,
            HijriError::InvalidTime {
                hour: 24,
                minute: 0,
                second: 0,
                nanosecond: 0
            }
        );
    }

    #[test]
    fn umm_al_qura_zone_is_utc_plus_three() {
        assert_eq!(umm_al_qura_offset().local_minus_utc(), 10_800);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_date() {
        let date = HijriDate::new(1445, 9, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":1445,"month":"Ramadan","day":1}"#);
        let back: HijriDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
