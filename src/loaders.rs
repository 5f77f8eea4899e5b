use crate::model::Student;
use eyre::WrapErr;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, trace};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Roster {
    #[serde(default)]
    students: Vec<Student>,
}

/// Read a roster from a TOML file made of `[[students]]` tables. Roster order
/// is preserved.
pub fn load_roster(file_name: &Path) -> eyre::Result<Vec<Student>> {
    let content = std::fs::read_to_string(file_name)
        .wrap_err_with(|| format!("cannot read roster file {}", file_name.display()))?;
    let students = parse_roster(&content)
        .wrap_err_with(|| format!("cannot parse roster file {}", file_name.display()))?;
    debug!(students = students.len(), "roster loaded");
    Ok(students)
}

pub fn parse_roster(content: &str) -> eyre::Result<Vec<Student>> {
    let roster: Roster = toml::from_str(content)?;
    for s in &roster.students {
        trace!(
            student = %s,
            exams = s.exams.len(),
            tasks = s.tasks.len(),
            "student has been loaded"
        );
    }
    Ok(roster.students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Proactiveness, StudentId, TaskRecord};

    #[test]
    fn test_parse_roster() {
        let students = parse_roster(
            r#"
            [[students]]
            id = 2
            name = "Budi Santoso"
            nim = "2101002"
            picture = "budi.png"
            exams = [70.0]
            tasks = [{ title = "report", status = "missing" }]

            [[students]]
            id = 1
            name = "Ani Lestari"
            exams = [80, 90]
            proactiveness = { bertanya = 3, menjawab = 5 }
            "#,
        )
        .unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, StudentId(2));
        assert_eq!(students[0].picture.as_deref(), Some("budi.png"));
        assert_eq!(students[0].tasks, vec![TaskRecord::missing("report")]);
        assert_eq!(students[1].proactiveness, Proactiveness::new(3, 5, 0));
    }

    #[test]
    fn test_empty_roster() {
        assert!(parse_roster("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_name() {
        assert!(parse_roster("[[students]]\nid = 1\n").is_err());
    }
}
