//! Query and aggregation functions over in-memory `Person` / `Student` rosters.
//!
//! ```
//! use chrono::NaiveDate;
//! use student_roster::{ClassLevel, FixedClock, Gender, Gpa, MaritalStatus, Person, QueryConfig, RosterQueries, Student};
//!
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
//! let queries = RosterQueries::new(&clock, QueryConfig::default());
//!
//! let born = NaiveDate::from_ymd_opt(2009, 12, 25).unwrap();
//! let student = Student::new(
//!     Person::new("Lin", Gender::Female, born),
//!     Gpa::new(3.7).unwrap(),
//!     ClassLevel::Freshman,
//!     MaritalStatus::Single,
//! );
//! let roster = [student];
//!
//! assert_eq!(queries.underage_students(&roster).len(), 1);
//! assert_eq!(queries.students_per_class_level(&roster)[&ClassLevel::Freshman], 1);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub use roster_domain::{
    QueryConfig, QueryConfigBuilder,
    analytics::{AgeRange, GroupCounts, SortOrder},
    model::{ClassLevel, Demographics, Gender, Individual, MaritalStatus, Person, Student, ZodiacSign},
};
pub use roster_ports::{Clock, FixedClock, SystemClock};
pub use roster_shared_kernel::{BirthDate, DomainError, DomainResult, ErrorContext, Gpa, Result, RosterError};
pub use roster_usecase::RosterQueries;

/// Pure query functions taking the reference date explicitly.
pub mod analytics {
    pub use roster_domain::analytics::*;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
