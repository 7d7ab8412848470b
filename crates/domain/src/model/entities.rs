pub mod individual;
pub mod person;
pub mod student;

pub use individual::Individual;
pub use person::{Demographics, Person};
pub use student::Student;
