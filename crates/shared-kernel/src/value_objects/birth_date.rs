// crates/shared-kernel/src/value_objects/birth_date.rs
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar date of birth. Age is always derived from it, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    #[inline]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns `None` for an impossible calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Whole years elapsed on `today`.
    ///
    /// The birthday counts once its month/day is reached, so a Feb 29 birthday
    /// is reached on Mar 1 of a common year. Dates after `today` yield 0.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        if today < self.0 {
            return 0;
        }
        let years = today.year() - self.0.year();
        let before_birthday = (today.month(), today.day()) < (self.0.month(), self.0.day());
        let age = if before_birthday { years - 1 } else { years };
        u32::try_from(age).unwrap_or(0)
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
