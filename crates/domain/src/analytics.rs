pub mod aggregate;
pub mod census;
pub mod filters;
pub mod ranking;

pub use aggregate::{
    GroupCounts, average_gpa_by_marital_status, marital_status_with_highest_average_gpa, people_per_birth_sign,
    students_per_class_level,
};
pub use census::{find_the_students, percentage_of_people_in_school};
pub use filters::{AgeRange, failing_students, students_by_age_range, students_by_gender, underage_students};
pub use ranking::{SortOrder, sort_by_gpa, top_of_the_class};
