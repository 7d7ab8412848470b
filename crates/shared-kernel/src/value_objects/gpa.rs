// crates/shared-kernel/src/value_objects/gpa.rs
use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Grade point average on the 0.0 - 4.0 scale.
///
/// Always finite and within [`Gpa::MIN`]..=[`Gpa::MAX`], so values can be
/// totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Gpa(f64);

impl Gpa {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 4.0;
    /// Conventional passing threshold.
    pub const PASSING: Self = Self(2.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            // `+ 0.0` turns -0.0 into 0.0 so `total_cmp` agrees with `==`.
            Ok(Self(value + 0.0))
        } else {
            Err(DomainError::GpaOutOfRange { value, min: Self::MIN, max: Self::MAX })
        }
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Total ordering; valid since the wrapped value is never NaN.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Gpa {
    type Error = DomainError;

    fn try_from(value: f64) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Gpa> for f64 {
    fn from(gpa: Gpa) -> Self {
        gpa.0
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
