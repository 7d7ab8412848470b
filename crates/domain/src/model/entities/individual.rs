use serde::{Deserialize, Serialize};

use crate::model::{Demographics, Person, Student};

/// Element of a mixed roster: either a plain person or an enrolled student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Individual {
    Person(Person),
    Student(Student),
}

impl Individual {
    #[inline]
    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Self::Student(student) => Some(student),
            Self::Person(_) => None,
        }
    }

    #[inline]
    pub fn is_student(&self) -> bool {
        matches!(self, Self::Student(_))
    }
}

impl Demographics for Individual {
    #[inline]
    fn profile(&self) -> &Person {
        match self {
            Self::Person(person) => person,
            Self::Student(student) => student.profile(),
        }
    }
}

impl From<Person> for Individual {
    fn from(person: Person) -> Self {
        Self::Person(person)
    }
}

impl From<Student> for Individual {
    fn from(student: Student) -> Self {
        Self::Student(student)
    }
}
