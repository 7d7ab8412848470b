//! テストフィクスチャ管理
use student_roster::Individual;

/// Mixed roster as a data-construction layer would hand it over.
#[allow(dead_code)]
pub const ROSTER_JSON: &str = r#"[
    { "kind": "person",  "name": "Ines",  "sex": "Female", "birth_date": "1971-03-21" },
    { "kind": "student", "name": "Bo",    "sex": "Male",   "birth_date": "2009-01-20",
      "gpa": 1.8, "level": "Freshman", "marital_status": "Single" },
    { "kind": "person",  "name": "Tomas", "sex": "Male",   "birth_date": "1988-12-25" },
    { "kind": "person",  "name": "Mae",   "sex": "Female", "birth_date": "1990-06-22" },
    { "kind": "student", "name": "Ravi",  "sex": "Male",   "birth_date": "2003-01-21",
      "gpa": 3.6, "level": "Senior", "marital_status": "Married" }
]"#;

#[allow(dead_code)]
pub fn roster() -> Vec<Individual> {
    serde_json::from_str(ROSTER_JSON).expect("roster fixture parses")
}
