// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar ↔ Julian Day Number arithmetic.
//!
//! The forward reckoning treats dates before the 1582 reform as Julian
//! calendar dates, applying the Gregorian century correction only from
//! 1582-10-15 onward. Two inverse reductions are provided:
//!
//! * [`CivilDate::from_jdn`] honours the same reform switch (JDN 2 299 161).
//! * [`CivilDate::gregorian_from_jdn`] always applies the Gregorian
//!   correction and skips astronomical year 0. This is the reduction used on
//!   Umm al-Qura day numbers.
//!
//! ## References
//! * Jean Meeus, *Astronomical Algorithms* (2nd ed. 1998), ch. 7.

use super::day_number::DayNumber;
use super::scales::JDN;

/// A calendar date in the civil (Julian before the reform, Gregorian after)
/// reckoning. Fields are not validated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Whether this date lies in 1582-10-05..=1582-10-14, the days dropped
    /// by the Gregorian reform.
    pub fn in_reform_gap(&self) -> bool {
        self.year == 1582 && self.month == 10 && (5..=14).contains(&self.day)
    }

    /// Julian Day Number of this date.
    ///
    /// January and February count as months 13 and 14 of the previous year.
    /// No century correction applies before 1583, except that the reform
    /// year switches to −10 from October 5 onward.
    pub fn to_jdn(&self) -> DayNumber<JDN> {
        let mut year = self.year;
        let mut month = self.month;
        if month < 3 {
            year -= 1;
            month += 12;
        }
        let y = f64::from(year);

        let a = (y / 100.0).floor();
        let mut b = 2.0 - a + (a / 4.0).floor();
        if year < 1583 {
            b = 0.0;
        }
        if year == 1582 {
            if month > 10 {
                b = -10.0;
            }
            if month == 10 {
                b = if self.day > 4 { -10.0 } else { 0.0 };
            }
        }

        let jd = (365.25 * (y + 4716.0)).floor()
            + (30.6001 * (f64::from(month) + 1.0)).floor()
            + f64::from(self.day)
            + b
            - 1524.0;
        DayNumber::new(jd)
    }

    /// Reduce a JDN to a civil date, switching from the Julian to the
    /// Gregorian calendar after JDN 2 299 160.
    pub fn from_jdn(jdn: DayNumber<JDN>) -> Self {
        let jd = jdn.value();
        let mut b = 0.0;
        if jdn >= DayNumber::<JDN>::GREGORIAN_REFORM {
            let a = ((jd - 1_867_216.25) / 36_524.25).floor();
            b = 1.0 + a - (a / 4.0).floor();
        }
        let bb = jd + b + 1524.0;
        let mut c = ((bb - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((bb - d) / 30.6001).floor();

        let day = bb - d - (30.6001 * e).floor();
        let mut month = e - 1.0;
        if e > 13.0 {
            c += 1.0;
            month = e - 13.0;
        }
        Self::new((c - 4716.0) as i32, month as u32, day as u32)
    }

    /// Reduce a JDN to a proleptic Gregorian date.
    ///
    /// There is no year 0: a result of astronomical year 0 or earlier is
    /// shifted down by one.
    pub fn gregorian_from_jdn(jdn: DayNumber<JDN>) -> Self {
        let z = (jdn.value() + 0.5).floor();
        let a = ((z - 1_867_216.25) / 36_524.25).floor();
        let a = z + 1.0 + a - (a / 4.0).floor();
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (e * 30.6001).floor();
        let month = if e > 13.5 { e - 13.0 } else { e - 1.0 };
        let mut year = if month > 2.5 { c - 4716.0 } else { c - 4715.0 };
        if year <= 0.0 {
            year -= 1.0;
        }
        Self::new(year as i32, month as u32, day as u32)
    }
}

impl DayNumber<JDN> {
    /// Julian Day Number of 1582-10-15, the first Gregorian day.
    pub const GREGORIAN_REFORM: Self = Self::new(2_299_161.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use qtty::Days;

    #[test]
    fn j2000_jdn() {
        assert_eq!(CivilDate::new(2000, 1, 1).to_jdn().value(), 2_451_545.0);
    }

    #[test]
    fn reform_boundary_is_contiguous() {
        let last_julian = CivilDate::new(1582, 10, 4).to_jdn();
        let first_gregorian = CivilDate::new(1582, 10, 15).to_jdn();
        assert_eq!(last_julian.value(), 2_299_160.0);
        assert_eq!(first_gregorian, DayNumber::<JDN>::GREGORIAN_REFORM);
    }

    #[test]
    fn reform_year_january_uses_julian_rule() {
        // Julian 1582-01-01, 277 days before the first Gregorian day.
        let jan = CivilDate::new(1582, 1, 1).to_jdn();
        assert_eq!(jan.value(), 2_298_884.0);
    }

    #[test]
    fn january_1583_uses_reform_correction() {
        // Normalised into 1582 month 13: −10, which equals the century rule for 1582.
        let jdn = CivilDate::new(1583, 1, 1).to_jdn();
        let expected = NaiveDate::from_ymd_opt(1583, 1, 1).unwrap();
        assert_eq!(jdn, DayNumber::<JDN>::from_naive_date(expected));
    }

    #[test]
    fn gregorian_dates_match_chrono() {
        for (y, m, d) in [(1600, 2, 29), (1900, 3, 1), (2024, 3, 11), (2100, 12, 31)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(
                CivilDate::new(y, m, d).to_jdn(),
                DayNumber::<JDN>::from_naive_date(date),
                "{date}"
            );
        }
    }

    #[test]
    fn civil_roundtrip_outside_gap() {
        for date in [
            CivilDate::new(622, 7, 15),
            CivilDate::new(1000, 2, 29), // Julian leap day
            CivilDate::new(1582, 10, 4),
            CivilDate::new(1582, 10, 15),
            CivilDate::new(1583, 2, 28),
            CivilDate::new(2024, 3, 11),
        ] {
            assert_eq!(CivilDate::from_jdn(date.to_jdn()), date, "{date:?}");
        }
    }

    #[test]
    fn gap_dates_do_not_roundtrip() {
        let gap = CivilDate::new(1582, 10, 10);
        assert!(gap.in_reform_gap());
        assert_ne!(CivilDate::from_jdn(gap.to_jdn()), gap);
        assert!(!CivilDate::new(1582, 10, 15).in_reform_gap());
    }

    #[test]
    fn gregorian_reduction_of_ramadan_1445() {
        let date = CivilDate::gregorian_from_jdn(DayNumber::new(2_460_381.0));
        assert_eq!(date, CivilDate::new(2024, 3, 11));
    }

    #[test]
    fn gregorian_reduction_is_proleptic() {
        // JDN 2 299 160 is 1582-10-04 Julian, 1582-10-14 proleptic Gregorian.
        let date = CivilDate::gregorian_from_jdn(DayNumber::new(2_299_160.0));
        assert_eq!(date, CivilDate::new(1582, 10, 14));
    }

    #[test]
    fn gregorian_reduction_skips_year_zero() {
        // JDN 1 721 060 is astronomical 0000-01-01, conventionally 1 BC.
        let date = CivilDate::gregorian_from_jdn(DayNumber::new(1_721_060.0));
        assert_eq!(date, CivilDate::new(-1, 1, 1));
    }

    #[test]
    fn day_after_last_julian_day_is_october_15() {
        let next = CivilDate::new(1582, 10, 4).to_jdn() + Days::new(1.0);
        assert_eq!(CivilDate::from_jdn(next), CivilDate::new(1582, 10, 15));
    }

    #[test]
    fn forward_reckoning_is_strictly_increasing() {
        // Every civil date recovered from a JDN maps back to that JDN, so
        // chronological order is preserved through the reform.
        let mut jdn = CivilDate::new(622, 7, 15).to_jdn();
        let end = CivilDate::new(2100, 1, 1).to_jdn();
        while jdn < end {
            let date = CivilDate::from_jdn(jdn);
            assert_eq!(date.to_jdn(), jdn, "{date:?}");
            assert!(!date.in_reform_gap(), "{date:?}");
            jdn += Days::new(1.0);
        }
    }
}
