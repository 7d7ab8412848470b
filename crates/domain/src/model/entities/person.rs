use chrono::NaiveDate;
use roster_shared_kernel::BirthDate;
use serde::{Deserialize, Serialize};

use crate::model::{Gender, ZodiacSign};

/// Base record for anyone on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    sex: Gender,
    birth_date: BirthDate,
}

impl Person {
    pub fn new(name: impl Into<String>, sex: Gender, birth_date: impl Into<BirthDate>) -> Self {
        Self { name: name.into(), sex, birth_date: birth_date.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Uniform read access to the `Person` part of any roster entity.
///
/// Age and birth sign are derived on every call from the stored birth date.
pub trait Demographics {
    fn profile(&self) -> &Person;

    #[inline]
    fn sex(&self) -> Gender {
        self.profile().sex
    }

    #[inline]
    fn birth_date(&self) -> BirthDate {
        self.profile().birth_date
    }

    /// 指定日時点の満年齢
    #[inline]
    fn age_on(&self, today: NaiveDate) -> u32 {
        self.birth_date().age_on(today)
    }

    #[inline]
    fn birth_sign(&self) -> ZodiacSign {
        ZodiacSign::from_birth_date(self.birth_date())
    }
}

impl Demographics for Person {
    #[inline]
    fn profile(&self) -> &Person {
        self
    }
}

impl<T: Demographics + ?Sized> Demographics for &T {
    #[inline]
    fn profile(&self) -> &Person {
        (**self).profile()
    }
}
