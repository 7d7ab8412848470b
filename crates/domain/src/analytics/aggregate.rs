// crates/domain/src/analytics/aggregate.rs
use std::collections::BTreeMap;

use crate::model::{ClassLevel, Demographics, Individual, MaritalStatus, Student, ZodiacSign};

/// Count per grouping key. Every key of the closed set is present, in
/// declaration order, even when its count is zero.
pub type GroupCounts<K> = BTreeMap<K, usize>;

pub fn students_per_class_level(students: &[Student]) -> GroupCounts<ClassLevel> {
    tally(students, &ClassLevel::ALL, Student::level)
}

pub fn people_per_birth_sign(people: &[Individual]) -> GroupCounts<ZodiacSign> {
    tally(people, &ZodiacSign::ALL, |p: &Individual| p.birth_sign())
}

/// Mean GPA per marital status; `None` marks a status with no students.
pub fn average_gpa_by_marital_status(students: &[Student]) -> BTreeMap<MaritalStatus, Option<f64>> {
    MaritalStatus::ALL
        .iter()
        .map(|&status| {
            let (sum, count) = students
                .iter()
                .filter(|s| s.marital_status() == status)
                .fold((0.0_f64, 0_usize), |(sum, count), s| (sum + s.gpa().value(), count + 1));
            let average = (count > 0).then(|| sum / count as f64);
            (status, average)
        })
        .collect()
}

/// Marital status whose students have the highest mean GPA.
///
/// Statuses without students never win. On equal averages the status that
/// comes first in [`MaritalStatus::ALL`] is kept. `None` for an empty roster.
pub fn marital_status_with_highest_average_gpa(students: &[Student]) -> Option<MaritalStatus> {
    let averages = average_gpa_by_marital_status(students);
    let mut best: Option<(MaritalStatus, f64)> = None;
    for status in MaritalStatus::ALL {
        let Some(average) = averages.get(&status).copied().flatten() else {
            continue;
        };
        if best.is_none_or(|(_, top)| average > top) {
            best = Some((status, average));
        }
    }
    best.map(|(status, _)| status)
}

fn tally<T, K, F>(items: &[T], keys: &[K], key_fn: F) -> GroupCounts<K>
where
    T: Sync,
    K: Ord + Copy + Send,
    F: Fn(&T) -> K + Sync,
{
    let mut counts: GroupCounts<K> = keys.iter().map(|&key| (key, 0)).collect();
    for (key, n) in count_keys(items, key_fn) {
        *counts.entry(key).or_default() += n;
    }
    counts
}

#[cfg(not(feature = "parallel"))]
fn count_keys<T, K, F>(items: &[T], key_fn: F) -> GroupCounts<K>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut map = GroupCounts::new();
    for item in items {
        *map.entry(key_fn(item)).or_default() += 1;
    }
    map
}

#[cfg(feature = "parallel")]
fn count_keys<T, K, F>(items: &[T], key_fn: F) -> GroupCounts<K>
where
    T: Sync,
    K: Ord + Send,
    F: Fn(&T) -> K + Sync,
{
    use rayon::prelude::*;

    items
        .par_iter()
        .fold(GroupCounts::new, |mut acc, item| {
            *acc.entry(key_fn(item)).or_default() += 1;
            acc
        })
        .reduce(GroupCounts::new, |mut left, right| {
            for (key, n) in right {
                *left.entry(key).or_default() += n;
            }
            left
        })
}
