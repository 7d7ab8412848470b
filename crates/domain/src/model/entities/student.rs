use roster_shared_kernel::Gpa;
use serde::{Deserialize, Serialize};

use crate::model::{ClassLevel, Demographics, MaritalStatus, Person};

/// A person enrolled in school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    gpa: Gpa,
    level: ClassLevel,
    marital_status: MaritalStatus,
}

impl Student {
    pub fn new(person: Person, gpa: Gpa, level: ClassLevel, marital_status: MaritalStatus) -> Self {
        Self { person, gpa, level, marital_status }
    }

    #[inline]
    pub fn gpa(&self) -> Gpa {
        self.gpa
    }

    #[inline]
    pub fn level(&self) -> ClassLevel {
        self.level
    }

    #[inline]
    pub fn marital_status(&self) -> MaritalStatus {
        self.marital_status
    }

    pub fn into_person(self) -> Person {
        self.person
    }
}

impl Demographics for Student {
    #[inline]
    fn profile(&self) -> &Person {
        &self.person
    }
}
