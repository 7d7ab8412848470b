// crates/domain/src/analytics/census.rs
use crate::model::{Individual, Student};

/// Students found in a mixed roster, in roster order.
pub fn find_the_students(people: &[Individual]) -> Vec<&Student> {
    people.iter().filter_map(Individual::as_student).collect()
}

/// Fraction of the roster that is enrolled, in `0.0..=1.0`. An empty roster
/// is `0.0`.
pub fn percentage_of_people_in_school(people: &[Individual]) -> f64 {
    if people.is_empty() {
        return 0.0;
    }
    let students = people.iter().filter(|p| p.is_student()).count();
    students as f64 / people.len() as f64
}
