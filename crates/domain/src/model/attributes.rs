// crates/domain/src/model/attributes.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Sex recorded for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];
}

/// Class level of an enrolled student, in progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassLevel {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl ClassLevel {
    pub const ALL: [Self; 4] = [Self::Freshman, Self::Sophomore, Self::Junior, Self::Senior];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub const ALL: [Self; 4] = [Self::Single, Self::Married, Self::Divorced, Self::Widowed];
}

macro_rules! impl_keyword {
    ($ty:ty, $label:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    other => Err(format!("Unknown {}: {other}", $label)),
                }
            }
        }
    };
}

impl_keyword!(Gender, "gender", { Male => "male", Female => "female" });
impl_keyword!(ClassLevel, "class level", {
    Freshman => "freshman",
    Sophomore => "sophomore",
    Junior => "junior",
    Senior => "senior",
});
impl_keyword!(MaritalStatus, "marital status", {
    Single => "single",
    Married => "married",
    Divorced => "divorced",
    Widowed => "widowed",
});
