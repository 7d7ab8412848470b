use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, trace};
use roster_domain::{
    QueryConfig,
    analytics::{self, AgeRange, GroupCounts},
    model::{ClassLevel, Demographics, Gender, Individual, MaritalStatus, Student, ZodiacSign},
};
use roster_ports::{Clock, SystemClock};
use roster_shared_kernel::DomainResult;

static SYSTEM_CLOCK: SystemClock = SystemClock;

/// Query surface over in-memory rosters.
///
/// Age-dependent queries read the clock on every call, so results stay
/// correct however long the value lives.
pub struct RosterQueries<'a> {
    clock: &'a dyn Clock,
    config: QueryConfig,
}

impl RosterQueries<'static> {
    pub fn with_system_clock(config: QueryConfig) -> Self {
        Self::new(&SYSTEM_CLOCK, config)
    }
}

impl Default for RosterQueries<'static> {
    fn default() -> Self {
        Self::with_system_clock(QueryConfig::default())
    }
}

impl<'a> RosterQueries<'a> {
    pub fn new(clock: &'a dyn Clock, config: QueryConfig) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn students_by_gender<'s>(&self, students: &'s [Student], sex: Gender) -> Vec<&'s Student> {
        let found = analytics::students_by_gender(students, sex);
        debug!("students_by_gender({sex}): {} of {}", found.len(), students.len());
        found
    }

    /// Students aged `min_age..=max_age` today.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAgeRange`](roster_shared_kernel::DomainError::InvalidAgeRange)
    /// when `min_age > max_age`.
    pub fn students_by_age_range<'s>(
        &self,
        students: &'s [Student],
        min_age: u32,
        max_age: u32,
    ) -> DomainResult<Vec<&'s Student>> {
        let range = AgeRange::new(min_age, max_age)?;
        let today = self.today();
        let found = analytics::students_by_age_range(students, range, today);
        debug!("students_by_age_range({min_age}..={max_age}, today={today}): {} of {}", found.len(), students.len());
        Ok(found)
    }

    pub fn failing_students<'s>(&self, students: &'s [Student]) -> Vec<&'s Student> {
        let found = analytics::failing_students(students, self.config.passing_gpa);
        debug!("failing_students(< {}): {} of {}", self.config.passing_gpa, found.len(), students.len());
        found
    }

    pub fn students_per_class_level(&self, students: &[Student]) -> GroupCounts<ClassLevel> {
        let counts = analytics::students_per_class_level(students);
        debug!("students_per_class_level: {} students", students.len());
        for (level, n) in &counts {
            trace!("  {level}: {n}");
        }
        counts
    }

    pub fn average_gpa_by_marital_status(&self, students: &[Student]) -> BTreeMap<MaritalStatus, Option<f64>> {
        let averages = analytics::average_gpa_by_marital_status(students);
        debug!("average_gpa_by_marital_status: {} students", students.len());
        for (status, average) in &averages {
            trace!("  {status}: {average:?}");
        }
        averages
    }

    /// `None` when there are no students to average.
    pub fn marital_status_with_highest_average_gpa(&self, students: &[Student]) -> Option<MaritalStatus> {
        let best = analytics::marital_status_with_highest_average_gpa(students);
        debug!("marital_status_with_highest_average_gpa: {best:?} over {} students", students.len());
        best
    }

    pub fn top_of_the_class<'s>(&self, students: &'s [Student], count: usize) -> Vec<&'s Student> {
        let top = analytics::top_of_the_class(students, count);
        debug!("top_of_the_class({count}): {} of {}", top.len(), students.len());
        top
    }

    pub fn underage_students<'s>(&self, students: &'s [Student]) -> Vec<&'s Student> {
        let today = self.today();
        let found = analytics::underage_students(students, self.config.age_of_majority, today);
        debug!(
            "underage_students(< {}, today={today}): {} of {}",
            self.config.age_of_majority,
            found.len(),
            students.len()
        );
        found
    }

    pub fn find_the_students<'s>(&self, people: &'s [Individual]) -> Vec<&'s Student> {
        let found = analytics::find_the_students(people);
        debug!("find_the_students: {} of {}", found.len(), people.len());
        found
    }

    pub fn percentage_of_people_in_school(&self, people: &[Individual]) -> f64 {
        let pct = analytics::percentage_of_people_in_school(people);
        debug!("percentage_of_people_in_school: {pct:.3} of {} people", people.len());
        pct
    }

    pub fn people_per_birth_sign(&self, people: &[Individual]) -> GroupCounts<ZodiacSign> {
        let counts = analytics::people_per_birth_sign(people);
        debug!("people_per_birth_sign: {} people", people.len());
        for (sign, n) in &counts {
            trace!("  {sign}: {n}");
        }
        counts
    }

    pub fn birth_sign(&self, person: &impl Demographics) -> ZodiacSign {
        let sign = person.birth_sign();
        debug!("birth_sign({}): {sign}", person.birth_date());
        sign
    }
}
