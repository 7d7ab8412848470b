// crates/domain/src/analytics/ranking.rs
use std::cmp::Ordering;

use crate::model::{ClassLevel, Student};

/// ソート順序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sorts students by GPA in place. The sort is stable: equal GPAs keep their
/// relative input order in either direction.
pub fn sort_by_gpa(students: &mut [&Student], order: SortOrder) {
    students.sort_by(|a, b| order.apply(a.gpa().total_cmp(&b.gpa())));
}

/// The `count` best students of each class level.
///
/// Levels appear in [`ClassLevel::ALL`] order and are never interleaved;
/// within a level students are ordered by descending GPA. A level with fewer
/// than `count` students contributes all of them.
pub fn top_of_the_class(students: &[Student], count: usize) -> Vec<&Student> {
    ClassLevel::ALL
        .into_iter()
        .flat_map(|level| {
            let mut group: Vec<&Student> = students.iter().filter(|s| s.level() == level).collect();
            sort_by_gpa(&mut group, SortOrder::Descending);
            group.truncate(count);
            group
        })
        .collect()
}
