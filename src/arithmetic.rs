// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Gregorian → Hijri (arithmetic reckoning)
//!
//! Converts a civil date to a Hijri date with the tabular 30-year-cycle
//! approximation:
//!
//! 1. Reduce the civil date to a Julian Day Number (Julian calendar before
//!    the 1582 reform, Gregorian after).
//! 2. Reduce the JDN back to a civil date with the reform switch. The result
//!    does not feed the Hijri date; it only detects inputs that fall in the
//!    reform gap.
//! 3. Count elapsed days `z` from JDN 1 948 084, split them into 30-year
//!    cycles of 10 631 days and mean years of 10 631/30 days shifted by
//!    8.01/60 of a day.
//! 4. Split the remainder into months of alternating 29.5-day mean length.
//!
//! This approximates the observed calendar to within about a day. It is not
//! the inverse of the Umm al-Qura lookup in [`tabulated`](super::tabulated).
//!
//! ## Quick Example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use hijri::{gregorian_to_hijri, HijriMonth};
//!
//! let moment = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
//! let hijri = gregorian_to_hijri(&moment);
//! assert_eq!((hijri.year(), hijri.month(), hijri.day()), (1445, HijriMonth::Ramadan, 1));
//! ```

use chrono::{DateTime, Datelike, TimeZone};

use super::civil::CivilDate;
use super::date::{HijriDate, HijriDateTime};
use super::day_number::DayNumber;
use super::month::HijriMonth;
use super::scales::{HijriEpoch, JDN};
use super::weekday::weekday_of;
use crate::HijriError;

/// Days in a 30-year cycle (360 mean lunar months).
const CYCLE_DAYS: f64 = 10_631.0;

/// Mean tabular year.
const MEAN_YEAR_DAYS: f64 = CYCLE_DAYS / 30.0;

/// Year-boundary shift, in days.
const YEAR_SHIFT_DAYS: f64 = 8.01 / 60.0;

/// Outcome of reducing a civil date to a JDN and back.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Reckoning {
    jdn: DayNumber<JDN>,
    recovered: CivilDate,
}

fn reckon(date: CivilDate) -> Reckoning {
    let jdn = date.to_jdn();
    Reckoning {
        jdn,
        recovered: CivilDate::from_jdn(jdn),
    }
}

/// Hijri date of a Julian Day Number under the arithmetic reckoning.
///
/// Month is clamped to 12 at the year boundary. The day is raw algorithm
/// output; see [`HijriDate::validate_tabular`].
pub fn hijri_date_from_jdn(jdn: DayNumber<JDN>) -> HijriDate {
    let z = jdn.to::<HijriEpoch>().value();

    let cycle = (z / CYCLE_DAYS).floor();
    let z = z - CYCLE_DAYS * cycle;
    let j = ((z - YEAR_SHIFT_DAYS) / MEAN_YEAR_DAYS).floor();
    let year = 30.0 * cycle + j;

    let z = z - (j * MEAN_YEAR_DAYS + YEAR_SHIFT_DAYS).floor();
    let month = ((z + 28.5001) / 29.5).floor().clamp(1.0, 12.0);
    let day = z - (29.5001 * month - 29.0).floor();

    let month = HijriMonth::ALL[month as usize - 1];
    HijriDate::from_parts(year as i32, month, day as u32)
}

/// Hijri date of a civil date (Julian before 1582-10-15).
///
/// Never fails; dates in the reform gap are reckoned as if the Julian
/// calendar continued.
pub fn civil_to_hijri(date: CivilDate) -> HijriDate {
    hijri_date_from_jdn(reckon(date).jdn)
}

/// Hijri date of a civil date, rejecting dates that do not exist.
///
/// # Errors
///
/// * [`HijriError::InvalidMonth`] outside `1..=12`.
/// * [`HijriError::InvalidDay`] outside `1..=31`, past the end of its month,
///   or inside 1582-10-05..=1582-10-14.
pub fn checked_civil_to_hijri(date: CivilDate) -> Result<HijriDate, HijriError> {
    if !(1..=12).contains(&date.month) {
        return Err(HijriError::InvalidMonth { month: date.month });
    }
    if !(1..=31).contains(&date.day) {
        return Err(HijriError::InvalidDay {
            day: date.day,
            month: date.month,
            max_day: 31,
        });
    }

    let reckoning = reckon(date);
    if reckoning.recovered != date {
        return Err(HijriError::InvalidDay {
            day: date.day,
            month: date.month,
            max_day: last_day_of_month(date.year, date.month),
        });
    }
    Ok(hijri_date_from_jdn(reckoning.jdn))
}

/// Last day of a civil month.
fn last_day_of_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        CivilDate::new(year + 1, 1, 1)
    } else {
        CivilDate::new(year, month + 1, 1)
    };
    let last = next_month.to_jdn() - qtty::Days::new(1.0);
    CivilDate::from_jdn(last).day
}

/// Convert a Gregorian moment to the Hijri calendar.
///
/// Wall-clock time, zone and weekday are carried over from `moment`. The
/// date fields of `moment` are reckoned as Julian calendar fields before the
/// 1582 reform.
pub fn gregorian_to_hijri<Tz: TimeZone>(moment: &DateTime<Tz>) -> HijriDateTime<Tz> {
    let civil = CivilDate::new(moment.year(), moment.month(), moment.day());
    HijriDateTime::from_converted(
        civil_to_hijri(civil),
        moment.time(),
        moment.timezone(),
        weekday_of(moment.weekday()),
    )
}

/// Like [`gregorian_to_hijri`], but rejects the days dropped by the 1582
/// reform.
///
/// # Errors
///
/// [`HijriError::InvalidDay`] for 1582-10-05..=1582-10-14.
pub fn checked_gregorian_to_hijri<Tz: TimeZone>(
    moment: &DateTime<Tz>,
) -> Result<HijriDateTime<Tz>, HijriError> {
    let civil = CivilDate::new(moment.year(), moment.month(), moment.day());
    Ok(HijriDateTime::from_converted(
        checked_civil_to_hijri(civil)?,
        moment.time(),
        moment.timezone(),
        weekday_of(moment.weekday()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HijriWeekday;
    use chrono::{FixedOffset, NaiveDate, Timelike, Utc};
    use qtty::Days;

    fn hijri(y: i32, m: u32, d: u32) -> (i32, u32, u32) {
        let h = civil_to_hijri(CivilDate::new(y, m, d));
        (h.year(), h.month().number(), h.day())
    }

    #[test]
    fn epoch_anchor() {
        // 1 Muharram 1 AH: Julian 622-07-15, JDN 1 948 439.
        assert_eq!(CivilDate::new(622, 7, 15).to_jdn().value(), 1_948_439.0);
        assert_eq!(hijri(622, 7, 15), (1, 1, 1));
        assert_eq!(hijri(622, 7, 14), (0, 12, 29));
    }

    #[test]
    fn hijri_epoch_scale_zero() {
        let zero = DayNumber::<HijriEpoch>::new(0.0).to::<JDN>();
        let date = hijri_date_from_jdn(zero);
        assert_eq!(
            (date.year(), date.month(), date.day()),
            (-1, HijriMonth::DhuAlHijja, 30)
        );
        let next = hijri_date_from_jdn(zero + Days::new(1.0));
        assert_eq!((next.year(), next.month(), next.day()), (0, HijriMonth::Muharram, 1));
    }

    #[test]
    fn known_dates() {
        assert_eq!(hijri(2024, 3, 10), (1445, 9, 1));
        assert_eq!(hijri(2024, 3, 11), (1445, 9, 2));
        assert_eq!(hijri(2023, 7, 19), (1445, 1, 2));
        assert_eq!(hijri(2000, 1, 1), (1420, 9, 25));
        assert_eq!(hijri(1937, 3, 14), (1356, 1, 2));
    }

    #[test]
    fn years_before_the_common_era() {
        // Astronomical year numbering on input, Julian reckoning throughout.
        assert_eq!(CivilDate::new(-500, 3, 1).to_jdn().value(), 1_538_493.0);
        assert_eq!(hijri(-500, 3, 1), (-1156, 2, 27));
        assert_eq!(hijri(-1, 12, 31), (-641, 5, 4));
        assert_eq!(hijri(0, 1, 1), (-641, 5, 5));

        let moment = Utc.with_ymd_and_hms(-500, 3, 1, 6, 30, 0).unwrap();
        let converted = gregorian_to_hijri(&moment);
        assert_eq!(
            (converted.year(), converted.month(), converted.day()),
            (-1156, HijriMonth::Safar, 27)
        );
        assert_eq!(converted.clock(), (6, 30, 0));
        assert!(converted.date().validate_tabular().is_ok());
    }

    #[test]
    fn reform_boundary_is_consecutive() {
        assert_eq!(hijri(1582, 10, 4), (990, 9, 17));
        assert_eq!(hijri(1582, 10, 15), (990, 9, 18));
    }

    #[test]
    fn month_and_day_bounds_over_many_years() {
        let mut jdn = CivilDate::new(622, 7, 15).to_jdn();
        let mut previous = hijri_date_from_jdn(jdn);
        for _ in 0..200_000 {
            jdn += Days::new(1.0);
            let date = hijri_date_from_jdn(jdn);
            assert!(date > previous, "{date:?} after {previous:?}");
            assert!((1..=30).contains(&date.day()), "{date:?}");
            previous = date;
        }
    }

    #[test]
    fn raw_output_needs_tabular_validation() {
        // Year 1 is a common year, yet the reckoning produces 30 Ramadan.
        let date = hijri_date_from_jdn(DayNumber::new(1_948_704.0));
        assert_eq!((date.year(), date.month(), date.day()), (1, HijriMonth::Ramadan, 30));
        assert!(matches!(
            date.validate_tabular(),
            Err(HijriError::InvalidDay { day: 30, month: 9, max_day: 29 })
        ));
    }

    #[test]
    fn checked_rejects_gap_and_impossible_days() {
        assert!(checked_civil_to_hijri(CivilDate::new(1582, 10, 4)).is_ok());
        assert!(checked_civil_to_hijri(CivilDate::new(1582, 10, 15)).is_ok());
        assert_eq!(
            checked_civil_to_hijri(CivilDate::new(1582, 10, 10)),
            Err(HijriError::InvalidDay {
                day: 10,
                month: 10,
                max_day: 31
            })
        );
        assert_eq!(
            checked_civil_to_hijri(CivilDate::new(2023, 2, 29)),
            Err(HijriError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28
            })
        );
        assert_eq!(
            checked_civil_to_hijri(CivilDate::new(2024, 13, 1)),
            Err(HijriError::InvalidMonth { month: 13 })
        );
        assert!(matches!(
            checked_civil_to_hijri(CivilDate::new(2024, 1, 0)),
            Err(HijriError::InvalidDay { max_day: 31, .. })
        ));
        // Julian leap rule before the reform.
        assert!(checked_civil_to_hijri(CivilDate::new(1500, 2, 29)).is_ok());
    }

    #[test]
    fn checked_and_total_agree_outside_gap() {
        let mut date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        for _ in 0..120 {
            let civil = CivilDate::new(date.year(), date.month(), date.day());
            assert_eq!(checked_civil_to_hijri(civil), Ok(civil_to_hijri(civil)));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn moment_fields_carry_through() {
        let zone = FixedOffset::east_opt(3 * 3600).unwrap();
        let moment = zone
            .with_ymd_and_hms(2024, 3, 11, 21, 45, 7)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let hijri = gregorian_to_hijri(&moment);
        assert_eq!(hijri.date(), HijriDate::new(1445, 9, 2).unwrap());
        assert_eq!(hijri.clock(), (21, 45, 7));
        assert_eq!(hijri.nanosecond(), 123_456_789);
        assert_eq!(hijri.timezone(), &zone);
        assert_eq!(hijri.weekday(), Some(HijriWeekday::Ithnayn));
    }

    #[test]
    fn checked_moment_rejects_gap() {
        let gap = Utc.with_ymd_and_hms(1582, 10, 9, 0, 0, 0).unwrap();
        assert!(checked_gregorian_to_hijri(&gap).is_err());
        let ok = Utc.with_ymd_and_hms(1582, 10, 15, 0, 0, 0).unwrap();
        assert_eq!(
            checked_gregorian_to_hijri(&ok).unwrap(),
            gregorian_to_hijri(&ok)
        );
    }

    #[test]
    fn from_datetime() {
        let moment = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let hijri: HijriDateTime<Utc> = moment.into();
        assert_eq!(hijri.date(), HijriDate::new(1445, 9, 1).unwrap());
        assert_eq!(hijri.weekday(), Some(HijriWeekday::Ahad));
    }

    #[test]
    fn from_timestamp_uses_local_date() {
        // 2024-03-10T22:00:00Z is already 2024-03-11 in Mecca.
        let secs = Utc
            .with_ymd_and_hms(2024, 3, 10, 22, 0, 0)
            .unwrap()
            .timestamp();
        let mecca = crate::umm_al_qura_offset();
        let hijri = HijriDateTime::from_timestamp(secs, 0, Some(mecca)).unwrap();
        assert_eq!(hijri.date(), HijriDate::new(1445, 9, 2).unwrap());
        assert_eq!(hijri.hour(), 1);

        let utc = HijriDateTime::from_timestamp(secs, 0, Some(Utc)).unwrap();
        assert_eq!(utc.date(), HijriDate::new(1445, 9, 1).unwrap());
    }

    #[test]
    fn from_timestamp_out_of_range() {
        assert_eq!(
            HijriDateTime::from_timestamp(i64::MAX, 0, Some(Utc)),
            Err(HijriError::TimestampOutOfRange {
                seconds: i64::MAX,
                nanoseconds: 0
            })
        );
    }
}
