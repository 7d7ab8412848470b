// crates/domain/src/analytics/filters.rs
use chrono::NaiveDate;
use roster_shared_kernel::{DomainError, DomainResult, Gpa};

use crate::model::{Demographics, Gender, Student};

/// Inclusive age bounds, in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    min: u32,
    max: u32,
}

impl AgeRange {
    pub fn new(min: u32, max: u32) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::InvalidAgeRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

pub fn students_by_gender(students: &[Student], sex: Gender) -> Vec<&Student> {
    students.iter().filter(|s| s.sex() == sex).collect()
}

pub fn students_by_age_range(students: &[Student], range: AgeRange, today: NaiveDate) -> Vec<&Student> {
    students.iter().filter(|s| range.contains(s.age_on(today))).collect()
}

/// Students strictly below `passing_gpa`.
pub fn failing_students(students: &[Student], passing_gpa: Gpa) -> Vec<&Student> {
    students.iter().filter(|s| s.gpa() < passing_gpa).collect()
}

pub fn underage_students(students: &[Student], age_of_majority: u32, today: NaiveDate) -> Vec<&Student> {
    students.iter().filter(|s| s.age_on(today) < age_of_majority).collect()
}
