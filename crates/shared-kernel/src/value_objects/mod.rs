// crates/shared-kernel/src/value_objects/mod.rs
pub mod birth_date;
pub mod gpa;

pub use birth_date::BirthDate;
pub use gpa::Gpa;
