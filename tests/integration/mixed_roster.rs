// tests/integration/mixed_roster.rs
use student_roster::{Demographics, FixedClock, QueryConfig, RosterQueries, ZodiacSign};

#[path = "../common/mod.rs"]
mod common;
use common::{StudentBuilder, date, names, person, roster, today};

#[test]
fn extracts_two_students_from_five_people() {
    let clock = FixedClock(today());
    let people = roster();

    let students = RosterQueries::new(&clock, QueryConfig::default()).find_the_students(&people);
    assert_eq!(names(&students), vec!["Bo", "Ravi"]);
}

#[test]
fn percentage_in_school() {
    let clock = FixedClock(today());
    let q = RosterQueries::new(&clock, QueryConfig::default());

    assert_eq!(q.percentage_of_people_in_school(&roster()), 0.4);
    assert_eq!(q.percentage_of_people_in_school(&[]), 0.0);
}

#[test]
fn birth_sign_boundaries() {
    let clock = FixedClock(today());
    let q = RosterQueries::new(&clock, QueryConfig::default());
    let cases = [
        ((12, 25), ZodiacSign::Capricorn),
        ((1, 1), ZodiacSign::Capricorn),
        ((1, 20), ZodiacSign::Capricorn),
        ((1, 21), ZodiacSign::Aquarius),
        ((6, 22), ZodiacSign::Cancer),
    ];
    for ((month, day), expected) in cases {
        let someone = person("x", date(1995, month, day));
        assert_eq!(q.birth_sign(&someone), expected, "{month}/{day}");
    }
}

#[test]
fn counts_people_per_birth_sign() {
    let clock = FixedClock(today());
    let counts = RosterQueries::new(&clock, QueryConfig::default()).people_per_birth_sign(&roster());

    assert_eq!(counts.len(), 12);
    assert_eq!(counts[&ZodiacSign::Aries], 1);
    assert_eq!(counts[&ZodiacSign::Capricorn], 2);
    assert_eq!(counts[&ZodiacSign::Cancer], 1);
    assert_eq!(counts[&ZodiacSign::Aquarius], 1);
    assert_eq!(counts[&ZodiacSign::Leo], 0);
}

#[test]
fn student_and_person_share_demographics() {
    let student = StudentBuilder::new("Kai").born(date(2007, 8, 23)).build();
    assert_eq!(student.birth_sign(), ZodiacSign::Virgo);
    assert_eq!(student.age_on(today()), 19);

    let as_individual = StudentBuilder::new("Kai").born(date(2007, 8, 23)).build_individual();
    assert_eq!(as_individual.profile(), student.profile());
}
