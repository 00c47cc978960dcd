// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Saturday-anchored Hijri week.
//!
//! The Hijri week starts on Saturday (index 0) and ends on Friday (index 6).
//! Mapping to and from [`chrono::Weekday`] is a constant rotation:
//! `hijri = (days_from_sunday + 1) mod 7`.

use chrono::Weekday;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A day of the Hijri week, Saturday first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum HijriWeekday {
    /// Saturday.
    Sabt = 0,
    /// Sunday.
    Ahad,
    /// Monday.
    Ithnayn,
    /// Tuesday.
    Thulatha,
    /// Wednesday.
    Arbia,
    /// Thursday.
    Khamis,
    /// Friday.
    Jumua,
}

/// Rotation between `Weekday::num_days_from_sunday` and the Hijri index.
const ROTATION: u32 = 1;

const BY_INDEX: [HijriWeekday; 7] = [
    HijriWeekday::Sabt,
    HijriWeekday::Ahad,
    HijriWeekday::Ithnayn,
    HijriWeekday::Thulatha,
    HijriWeekday::Arbia,
    HijriWeekday::Khamis,
    HijriWeekday::Jumua,
];

const GREGORIAN_BY_HIJRI_INDEX: [Weekday; 7] = [
    Weekday::Sat,
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

impl HijriWeekday {
    /// Position in the Hijri week, Saturday = 0.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Weekday at position `index mod 7`.
    #[inline]
    pub const fn from_index(index: u32) -> Self {
        BY_INDEX[(index % 7) as usize]
    }

    /// The following day.
    #[inline]
    pub const fn succ(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Hijri weekday of a Gregorian weekday.
#[inline]
pub fn weekday_of(weekday: Weekday) -> HijriWeekday {
    HijriWeekday::from_index(weekday.num_days_from_sunday() + ROTATION)
}

/// Gregorian weekday of a Hijri weekday.
#[inline]
pub fn gregorian_weekday_of(weekday: HijriWeekday) -> Weekday {
    GREGORIAN_BY_HIJRI_INDEX[weekday.index() as usize]
}

impl From<Weekday> for HijriWeekday {
    fn from(weekday: Weekday) -> Self {
        weekday_of(weekday)
    }
}

impl From<HijriWeekday> for Weekday {
    fn from(weekday: HijriWeekday) -> Self {
        gregorian_weekday_of(weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREGORIAN: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    #[test]
    fn saturday_is_index_zero() {
        assert_eq!(weekday_of(Weekday::Sat), HijriWeekday::Sabt);
        assert_eq!(weekday_of(Weekday::Fri), HijriWeekday::Jumua);
        assert_eq!(HijriWeekday::Sabt.index(), 0);
        assert_eq!(HijriWeekday::Jumua.index(), 6);
    }

    #[test]
    fn bijection() {
        for wd in GREGORIAN {
            assert_eq!(gregorian_weekday_of(weekday_of(wd)), wd);
        }
        for i in 0..7 {
            let h = HijriWeekday::from_index(i);
            assert_eq!(weekday_of(gregorian_weekday_of(h)), h);
        }
    }

    #[test]
    fn rotation_is_constant() {
        for wd in GREGORIAN {
            let expected = (wd.num_days_from_sunday() + ROTATION) % 7;
            assert_eq!(weekday_of(wd).index(), expected);
        }
    }

    #[test]
    fn succ_follows_chrono() {
        for wd in GREGORIAN {
            assert_eq!(weekday_of(wd).succ(), weekday_of(wd.succ()));
        }
    }

    #[test]
    fn from_into() {
        let h: HijriWeekday = Weekday::Mon.into();
        assert_eq!(h, HijriWeekday::Ithnayn);
        assert_eq!(Weekday::from(h), Weekday::Mon);
    }
}
