// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Scale-parameterised day numbers.
//!
//! [`DayNumber<S>`] stores a whole-day count as a [`Days`] quantity whose
//! *meaning* is fixed by the compile-time marker `S: DayScale`. Both Hijri
//! pipelines move between scales (civil JDN, the Umm al-Qura modified day
//! number, elapsed Hijri days) through [`DayNumber::to`], so every epoch
//! constant lives in exactly one place.
//!
//! Values are kept in floating point. The calendar formulas floor at each
//! step, so whole-day inputs stay whole.

use chrono::{Datelike, NaiveDate, Weekday};
use qtty::Days;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JDN of 0000-12-31 (proleptic Gregorian), i.e. chrono's day 0 from CE.
const CE_DAY_ZERO_JDN: f64 = 1_721_425.0;

// ═══════════════════════════════════════════════════════════════════════════
// DayScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for day-count scales.
///
/// A **day scale** defines a human-readable label and a pair of conversions
/// between its native count and the chronological Julian Day Number. All
/// scales in this crate are constant offsets, so the conversions fold away.
pub trait DayScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`DayNumber`] formatting.
    const LABEL: &'static str;

    /// Convert a count on this scale to a JDN.
    fn to_jdn(value: Days) -> Days;

    /// Convert a JDN back to this scale.
    fn from_jdn(jdn: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// DayNumber<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A day on scale `S`.
///
/// `PhantomData` is zero-sized, so `DayNumber<S>` is layout-identical to
/// [`Days`] (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct DayNumber<S: DayScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: DayScale> DayNumber<S> {
    /// Create from a raw count of days since the scale's epoch.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian Day Number corresponding to this day.
    #[inline]
    pub fn jdn(&self) -> Days {
        S::to_jdn(self.quantity)
    }

    /// Build a day from a Julian Day Number.
    #[inline]
    pub fn from_jdn(jdn: Days) -> Self {
        Self::from_days(S::from_jdn(jdn))
    }

    /// Convert this day to another scale, routing through the JDN.
    #[inline]
    pub fn to<T: DayScale>(&self) -> DayNumber<T> {
        DayNumber::<T>::from_jdn(S::to_jdn(self.quantity))
    }

    /// Day number of a proleptic Gregorian `NaiveDate`.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        let jdn = CE_DAY_ZERO_JDN + f64::from(date.num_days_from_ce());
        Self::from_jdn(Days::new(jdn))
    }

    /// Day of the week. JDN 0 was a Monday.
    pub fn weekday(&self) -> Weekday {
        const FROM_MONDAY: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        let n = (self.jdn().value().floor() as i64).rem_euclid(7);
        FROM_MONDAY[n as usize]
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<S: DayScale> std::fmt::Display for DayNumber<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.value())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: DayScale> Serialize for DayNumber<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: DayScale> Deserialize<'de> for DayNumber<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: DayScale> Add<Days> for DayNumber<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: DayScale> AddAssign<Days> for DayNumber<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: DayScale> Sub<Days> for DayNumber<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: DayScale> SubAssign<Days> for DayNumber<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: DayScale> Sub for DayNumber<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: DayScale> From<Days> for DayNumber<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: DayScale> From<DayNumber<S>> for Days {
    #[inline]
    fn from(day: DayNumber<S>) -> Self {
        day.quantity
    }
}
