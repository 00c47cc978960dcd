// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hijri months and the tabular month-length table.
//!
//! Months alternate 30/29 days by position, except Ramadan (9) and
//! Dhu al-Hijja (12), which are 29 days in a common year and 30 in a leap
//! year. The table only validates outputs of the arithmetic reckoning; the
//! Umm al-Qura lookup takes its month lengths from the authoritative index.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::HijriError;

/// A month of the Hijri year, starting from Muharram = 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum HijriMonth {
    Muharram = 1,
    Safar,
    RabiAlAwwal,
    RabiAthThani,
    JumadaAlUla,
    JumadaAthThaniya,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQida,
    DhuAlHijja,
}

impl HijriMonth {
    /// All months in calendar order.
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAthThani,
        HijriMonth::JumadaAlUla,
        HijriMonth::JumadaAthThaniya,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQida,
        HijriMonth::DhuAlHijja,
    ];

    /// Month number, `1..=12`.
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Month from its number.
    ///
    /// # Errors
    ///
    /// [`HijriError::InvalidMonth`] outside `1..=12`.
    pub fn from_number(month: u32) -> Result<Self, HijriError> {
        match month {
            1..=12 => Ok(Self::ALL[month as usize - 1]),
            _ => Err(HijriError::InvalidMonth { month }),
        }
    }
}

impl TryFrom<u32> for HijriMonth {
    type Error = HijriError;

    fn try_from(month: u32) -> Result<Self, Self::Error> {
        Self::from_number(month)
    }
}

impl From<HijriMonth> for u32 {
    fn from(month: HijriMonth) -> Self {
        month.number()
    }
}

/// One row of the [`MonthTable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MonthTableEntry {
    /// Length in a common year.
    pub short_days: u32,
    /// Length in a leap year.
    pub leap_days: u32,
    /// Days in the common year before the first of this month.
    ///
    /// This is the running sum of the common-year lengths (0, 30, 59, …),
    /// not `30 · (month − 1)`. No conversion reads it.
    pub cumulative_offset_before_month: u32,
}

impl MonthTableEntry {
    const fn new(short_days: u32, leap_days: u32, cumulative_offset_before_month: u32) -> Self {
        Self {
            short_days,
            leap_days,
            cumulative_offset_before_month,
        }
    }

    /// Length under the given leap status.
    #[inline]
    pub const fn length(&self, is_leap: bool) -> u32 {
        if is_leap {
            self.leap_days
        } else {
            self.short_days
        }
    }
}

/// Fixed twelve-entry table of Hijri month lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTable {
    entries: [MonthTableEntry; 12],
}

/// The tabular month table.
pub static MONTH_TABLE: MonthTable = MonthTable {
    entries: [
        MonthTableEntry::new(30, 30, 0),   // Muharram
        MonthTableEntry::new(29, 29, 30),  // Safar
        MonthTableEntry::new(30, 30, 59),  // Rabi al-Awwal
        MonthTableEntry::new(29, 29, 89),  // Rabi ath-Thani
        MonthTableEntry::new(30, 30, 118), // Jumada al-Ula
        MonthTableEntry::new(29, 29, 148), // Jumada ath-Thaniya
        MonthTableEntry::new(30, 30, 177), // Rajab
        MonthTableEntry::new(29, 29, 207), // Shaban
        MonthTableEntry::new(29, 30, 236), // Ramadan
        MonthTableEntry::new(29, 29, 265), // Shawwal
        MonthTableEntry::new(30, 30, 294), // Dhu al-Qida
        MonthTableEntry::new(29, 30, 324), // Dhu al-Hijja
    ],
};

impl MonthTable {
    /// Row for `month`.
    #[inline]
    pub fn entry(&self, month: HijriMonth) -> &MonthTableEntry {
        &self.entries[month as usize - 1]
    }

    /// All rows, Muharram first.
    #[inline]
    pub fn entries(&self) -> &[MonthTableEntry; 12] {
        &self.entries
    }

    /// Number of days in `month`.
    #[inline]
    pub fn length(&self, month: HijriMonth, is_leap: bool) -> u32 {
        self.entry(month).length(is_leap)
    }

    /// Days in a common year before the first of `month`.
    #[inline]
    pub fn cumulative_offset_before_month(&self, month: HijriMonth) -> u32 {
        self.entry(month).cumulative_offset_before_month
    }
}

/// Number of days in `month` of a common or leap year.
#[inline]
pub fn hijri_month_length(month: HijriMonth, is_leap_year: bool) -> u32 {
    MONTH_TABLE.length(month, is_leap_year)
}

/// Tabular Islamic leap-year rule.
///
/// Eleven years in each 30-year cycle are leap years: 2, 5, 7, 10, 13, 16,
/// 18, 21, 24, 26 and 29.
#[inline]
pub fn is_hijri_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}
