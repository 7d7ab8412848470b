pub mod attributes;
pub mod entities;
pub mod zodiac;

pub use attributes::{ClassLevel, Gender, MaritalStatus};
pub use entities::{Demographics, Individual, Person, Student};
pub use zodiac::ZodiacSign;
