// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count scale markers.
//!
//! Each zero-sized type identifies a day count and encodes how it relates to
//! the canonical **chronological Julian Day Number** (JDN), the integer day
//! count that starts at midnight local time.
//!
//! | Marker | Description | Epoch (JDN) |
//! |--------|-------------|-------------|
//! | [`JDN`] | Chronological Julian Day Number | 0 |
//! | [`MJDN`] | Modified day number of the Umm al-Qura table | 2 400 000 |
//! | [`HijriEpoch`] | Elapsed days of the tabular Hijri reckoning | 1 948 084 |

use super::day_number::DayScale;
use qtty::Days;

/// Chronological Julian Day Number, the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JDN;

impl DayScale for JDN {
    const LABEL: &'static str = "JDN";

    #[inline(always)]
    fn to_jdn(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jdn(jdn: Days) -> Days {
        jdn
    }
}

/// Modified day number: `JDN − 2 400 000`.
///
/// Unlike the astronomical MJD this is not offset by half a day, since the
/// Umm al-Qura table counts whole civil days.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJDN;

const MJDN_EPOCH: Days = Days::new(2_400_000.0);

impl DayScale for MJDN {
    const LABEL: &'static str = "MJDN";

    #[inline(always)]
    fn to_jdn(value: Days) -> Days {
        value + MJDN_EPOCH
    }

    #[inline(always)]
    fn from_jdn(jdn: Days) -> Days {
        jdn - MJDN_EPOCH
    }
}

/// Elapsed days used by the tabular Hijri reckoning.
///
/// The zero point sits one lunar year before 1 Muharram 1 AH (JDN 1 948 439);
/// the 30-year cycle arithmetic absorbs the difference.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct HijriEpoch;

const HIJRI_EPOCH_JDN: Days = Days::new(1_948_084.0);

impl DayScale for HijriEpoch {
    const LABEL: &'static str = "Hijri days";

    #[inline(always)]
    fn to_jdn(value: Days) -> Days {
        value + HIJRI_EPOCH_JDN
    }

    #[inline(always)]
    fn from_jdn(jdn: Days) -> Days {
        jdn - HIJRI_EPOCH_JDN
    }
}

/// Generate pairwise `From<DayNumber<A>> for DayNumber<B>` implementations.
macro_rules! impl_day_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::day_number::DayNumber<$first>> for super::day_number::DayNumber<$rest> {
                #[inline]
                fn from(d: super::day_number::DayNumber<$first>) -> Self {
                    d.to::<$rest>()
                }
            }

            impl From<super::day_number::DayNumber<$rest>> for super::day_number::DayNumber<$first> {
                #[inline]
                fn from(d: super::day_number::DayNumber<$rest>) -> Self {
                    d.to::<$first>()
                }
            }
        )+

        impl_day_conversions!($($rest),+);
    };
}

impl_day_conversions!(JDN, MJDN, HijriEpoch);
