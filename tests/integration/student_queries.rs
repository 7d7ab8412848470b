// tests/integration/student_queries.rs
use student_roster::{ClassLevel, DomainError, FixedClock, Gender, MaritalStatus, QueryConfig, RosterQueries};

#[path = "../common/mod.rs"]
mod common;
use common::{StudentBuilder, date, names, today};

fn queries(clock: &FixedClock) -> RosterQueries<'_> {
    RosterQueries::new(clock, QueryConfig::default())
}

#[test]
fn scenario_counts_by_level() {
    let clock = FixedClock(today());
    let students = vec![
        StudentBuilder::new("a").level(ClassLevel::Freshman).gpa(3.9).build(),
        StudentBuilder::new("b").level(ClassLevel::Freshman).gpa(2.1).build(),
        StudentBuilder::new("c").level(ClassLevel::Senior).gpa(4.0).build(),
    ];

    let counts = queries(&clock).students_per_class_level(&students);
    assert_eq!(counts[&ClassLevel::Freshman], 2);
    assert_eq!(counts[&ClassLevel::Sophomore], 0);
    assert_eq!(counts[&ClassLevel::Junior], 0);
    assert_eq!(counts[&ClassLevel::Senior], 1);
    assert_eq!(counts.keys().copied().collect::<Vec<_>>(), ClassLevel::ALL.to_vec());
}

#[test]
fn empty_roster_is_well_defined() {
    let clock = FixedClock(today());
    let q = queries(&clock);

    let counts = q.students_per_class_level(&[]);
    assert!(ClassLevel::ALL.iter().all(|level| counts[level] == 0));
    assert!(q.students_by_gender(&[], Gender::Male).is_empty());
    assert!(q.students_by_age_range(&[], 0, 120).unwrap().is_empty());
    assert!(q.failing_students(&[]).is_empty());
    assert!(q.top_of_the_class(&[], 3).is_empty());
    assert!(q.underage_students(&[]).is_empty());
    assert_eq!(q.marital_status_with_highest_average_gpa(&[]), None);
    assert!(q.average_gpa_by_marital_status(&[]).values().all(Option::is_none));
}

#[test]
fn gender_filter_partitions_roster() {
    let clock = FixedClock(today());
    let students = vec![
        StudentBuilder::new("f1").sex(Gender::Female).build(),
        StudentBuilder::new("m1").sex(Gender::Male).build(),
        StudentBuilder::new("f2").sex(Gender::Female).build(),
    ];
    let q = queries(&clock);

    assert_eq!(names(&q.students_by_gender(&students, Gender::Female)), vec!["f1", "f2"]);
    assert_eq!(names(&q.students_by_gender(&students, Gender::Male)), vec!["m1"]);
}

#[test]
fn age_range_includes_boundary_ages() {
    let clock = FixedClock(today());
    let students = vec![
        StudentBuilder::new("just-17").born(date(2008, 10, 17)).build(),
        StudentBuilder::new("just-18").born(date(2008, 10, 16)).build(),
        StudentBuilder::new("22").born(date(2004, 1, 1)).build(),
        StudentBuilder::new("23").born(date(2003, 10, 16)).build(),
    ];

    let found = queries(&clock).students_by_age_range(&students, 18, 22).unwrap();
    assert_eq!(names(&found), vec!["just-18", "22"]);
}

#[test]
fn inverted_age_range_is_rejected() {
    let clock = FixedClock(today());
    let err = queries(&clock).students_by_age_range(&[], 25, 18).unwrap_err();
    assert_eq!(err, DomainError::InvalidAgeRange { min: 25, max: 18 });
}

#[test]
fn failing_means_strictly_below_two() {
    let clock = FixedClock(today());
    let students = vec![
        StudentBuilder::new("1.99").gpa(1.99).build(),
        StudentBuilder::new("2.00").gpa(2.0).build(),
        StudentBuilder::new("0.00").gpa(0.0).build(),
    ];
    assert_eq!(names(&queries(&clock).failing_students(&students)), vec!["1.99", "0.00"]);
}

#[test]
fn top_two_of_five_per_level() {
    let clock = FixedClock(today());
    let students = vec![
        StudentBuilder::new("j-2.0").level(ClassLevel::Junior).gpa(2.0).build(),
        StudentBuilder::new("s-3.0").level(ClassLevel::Senior).gpa(3.0).build(),
        StudentBuilder::new("j-3.9").level(ClassLevel::Junior).gpa(3.9).build(),
        StudentBuilder::new("j-3.1a").level(ClassLevel::Junior).gpa(3.1).build(),
        StudentBuilder::new("j-1.0").level(ClassLevel::Junior).gpa(1.0).build(),
        StudentBuilder::new("j-3.1b").level(ClassLevel::Junior).gpa(3.1).build(),
        StudentBuilder::new("f-2.5").level(ClassLevel::Freshman).gpa(2.5).build(),
    ];

    let top = queries(&clock).top_of_the_class(&students, 2);
    assert_eq!(names(&top), vec!["f-2.5", "j-3.9", "j-3.1a", "s-3.0"]);
}

#[test]
fn highest_average_gpa_by_marital_status() {
    let clock = FixedClock(today());
    let students = vec![
        StudentBuilder::new("a").marital_status(MaritalStatus::Single).gpa(2.0).build(),
        StudentBuilder::new("b").marital_status(MaritalStatus::Single).gpa(4.0).build(),
        StudentBuilder::new("c").marital_status(MaritalStatus::Divorced).gpa(3.5).build(),
    ];
    let q = queries(&clock);
    assert_eq!(q.marital_status_with_highest_average_gpa(&students), Some(MaritalStatus::Divorced));

    let tied = vec![
        StudentBuilder::new("w").marital_status(MaritalStatus::Widowed).gpa(3.0).build(),
        StudentBuilder::new("s").marital_status(MaritalStatus::Single).gpa(3.0).build(),
    ];
    assert_eq!(q.marital_status_with_highest_average_gpa(&tied), Some(MaritalStatus::Single));
}

#[test]
fn underage_depends_on_the_clock() {
    let students = vec![StudentBuilder::new("teen").born(date(2008, 12, 25)).build()];

    let before_birthday = FixedClock(date(2026, 12, 24));
    assert_eq!(queries(&before_birthday).underage_students(&students).len(), 1);

    let on_birthday = FixedClock(date(2026, 12, 25));
    assert!(queries(&on_birthday).underage_students(&students).is_empty());
}
