// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Umm al-Qura month index
//!
//! The Umm al-Qura calendar is adjusted by lunar observation, so month
//! lengths cannot be derived arithmetically. [`UmmAlQuraIndex`] is a
//! read-only table keyed by an **elapsed-month index**
//!
//! ```text
//! index = (year − 1)·12 + (month − 1) − 16 260
//! ```
//!
//! which is zero at 1 Muharram 1356 AH. For each covered index the table
//! yields the cumulative day offset `off` such that the modified day number
//! (`JDN − 2 400 000`) of day `d` of that month is `d + off`.
//!
//! Lookups outside the declared coverage fail with
//! [`HijriError::OutOfRange`] before any table entry is read.
//!
//! ## Quick Example
//! ```rust
//! use hijri::{HijriMonth, UmmAlQuraIndex};
//!
//! let index = UmmAlQuraIndex::embedded();
//! let ramadan = UmmAlQuraIndex::month_index(1445, HijriMonth::Ramadan);
//! assert_eq!(index.month_length(ramadan).unwrap(), 30);
//! ```

use std::borrow::Cow;
use std::ops::RangeInclusive;

use qtty::Days;
use tracing::debug;

use super::day_number::DayNumber;
use super::month::HijriMonth;
use super::scales::MJDN;
use crate::HijriError;

/// Elapsed months before the table's zero point (1 Muharram 1356 AH).
pub const EPOCH_OFFSET: i64 = 16_260;

/// Authoritative Hijri month table.
///
/// Stores the modified day number of the first day of each covered month,
/// followed by one terminal entry (the first day of the month after the last
/// covered one) so that every covered month has a known length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmmAlQuraIndex {
    first_index: i64,
    month_starts: Cow<'static, [i32]>,
}

impl UmmAlQuraIndex {
    /// Build an index from an externally supplied table.
    ///
    /// `month_starts[k]` is the modified day number (`JDN − 2 400 000`) of the
    /// first day of the month with elapsed-month index `first_index + k`; the
    /// last element only terminates the final covered month.
    ///
    /// # Errors
    ///
    /// [`HijriError::MalformedTable`] if fewer than two entries are given, if
    /// two consecutive entries are not 29 or 30 days apart, or if the covered
    /// months do not all belong to years that fit an `i32`.
    pub fn new(
        first_index: i64,
        month_starts: impl Into<Cow<'static, [i32]>>,
    ) -> Result<Self, HijriError> {
        let month_starts = month_starts.into();
        if month_starts.len() < 2 {
            return Err(HijriError::MalformedTable {
                reason: format!(
                    "need at least one month and a terminal entry, got {} entries",
                    month_starts.len()
                ),
            });
        }
        if let Some((k, gap)) = month_starts
            .windows(2)
            .map(|pair| i64::from(pair[1]) - i64::from(pair[0]))
            .enumerate()
            .find(|&(_, gap)| !matches!(gap, 29 | 30))
        {
            return Err(HijriError::MalformedTable {
                reason: format!(
                    "month at index {} spans {gap} days",
                    first_index.saturating_add(k as i64)
                ),
            });
        }
        let representable = Self::month_index(i32::MIN, HijriMonth::Muharram)
            ..=Self::month_index(i32::MAX, HijriMonth::DhuAlHijja);
        let last_index = i64::try_from(month_starts.len() - 2)
            .ok()
            .and_then(|months| first_index.checked_add(months));
        let fits = last_index
            .is_some_and(|last| representable.contains(&first_index) && representable.contains(&last));
        if !fits {
            return Err(HijriError::MalformedTable {
                reason: format!(
                    "{} months from index {first_index} leave the range of i32 Hijri years",
                    month_starts.len() - 1
                ),
            });
        }

        let index = Self {
            first_index,
            month_starts,
        };
        debug!(
            min_index = index.min_index(),
            max_index = index.max_index(),
            "umm al-qura index accepted"
        );
        Ok(index)
    }

    /// The table embedded in the crate, covering 1356 AH – 1500 AH.
    ///
    /// Materialised once on first use and shared for the process lifetime.
    #[cfg(feature = "ummalqura-data")]
    pub fn embedded() -> &'static UmmAlQuraIndex {
        use super::ummalqura_data::{FIRST_YEAR, MONTHS, MONTH_STARTS};
        use std::sync::OnceLock;

        static EMBEDDED: OnceLock<UmmAlQuraIndex> = OnceLock::new();
        EMBEDDED.get_or_init(|| {
            let first_index = Self::month_index(FIRST_YEAR, HijriMonth::Muharram);
            debug!(
                first_year = FIRST_YEAR,
                months = MONTHS,
                first_index,
                "umm al-qura index loaded"
            );
            Self {
                first_index,
                month_starts: Cow::Borrowed(&MONTH_STARTS[..]),
            }
        })
    }

    /// Elapsed-month index of `month` in Hijri `year`.
    #[inline]
    pub fn month_index(year: i32, month: HijriMonth) -> i64 {
        (i64::from(year) - 1) * 12 + (i64::from(month.number()) - 1) - EPOCH_OFFSET
    }

    /// First covered index.
    #[inline]
    pub fn min_index(&self) -> i64 {
        self.first_index
    }

    /// Last covered index.
    #[inline]
    pub fn max_index(&self) -> i64 {
        self.first_index + self.month_starts.len() as i64 - 2
    }

    /// Covered indices, `min_index()..=max_index()`.
    #[inline]
    pub fn coverage(&self) -> RangeInclusive<i64> {
        self.min_index()..=self.max_index()
    }

    /// Whether `index` is covered.
    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        self.coverage().contains(&index)
    }

    /// Hijri years fully or partly covered by the table.
    ///
    /// Construction keeps the coverage inside `i32` years, so the casts below
    /// are exact.
    pub fn years(&self) -> RangeInclusive<i32> {
        let year_of = |index: i64| ((index + EPOCH_OFFSET).div_euclid(12) + 1) as i32;
        year_of(self.min_index())..=year_of(self.max_index())
    }

    /// Slot of `index` in `month_starts`, or the range error.
    fn slot(&self, index: i64) -> Result<usize, HijriError> {
        if !self.contains(index) {
            return Err(HijriError::OutOfRange {
                index,
                min: self.min_index(),
                max: self.max_index(),
            });
        }
        Ok((index - self.first_index) as usize)
    }

    /// Cumulative day offset of the month at `index`: the modified day number
    /// of the day before its first day.
    ///
    /// # Errors
    ///
    /// [`HijriError::OutOfRange`] outside [`coverage`](Self::coverage).
    pub fn day_offset(&self, index: i64) -> Result<Days, HijriError> {
        let slot = self.slot(index)?;
        Ok(Days::new(f64::from(self.month_starts[slot]) - 1.0))
    }

    /// Modified day number of the first day of the month at `index`.
    ///
    /// # Errors
    ///
    /// [`HijriError::OutOfRange`] outside [`coverage`](Self::coverage).
    pub fn month_start(&self, index: i64) -> Result<DayNumber<MJDN>, HijriError> {
        let slot = self.slot(index)?;
        Ok(DayNumber::new(f64::from(self.month_starts[slot])))
    }

    /// Observed length (29 or 30) of the month at `index`.
    ///
    /// # Errors
    ///
    /// [`HijriError::OutOfRange`] outside [`coverage`](Self::coverage).
    pub fn month_length(&self, index: i64) -> Result<u32, HijriError> {
        let slot = self.slot(index)?;
        Ok((self.month_starts[slot + 1] - self.month_starts[slot]) as u32)
    }
}
