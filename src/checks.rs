use crate::model::Student;
use eyre::bail;
use std::collections::HashMap;
use tracing::warn;

pub fn ensure_unique_ids(students: &[Student]) -> eyre::Result<()> {
    let mut seen = HashMap::new();
    for s in students {
        if let Some(previous) = seen.insert(s.id, s) {
            bail!(
                "students {} and {} share the same id {}",
                previous,
                s,
                s.id
            );
        }
    }
    Ok(())
}

/// Warn about counters exceeding the number of meetings. Such counters get
/// capped when computing the proactiveness score.
pub fn check_proactiveness_bounds(students: &[Student], total_meetings: u32) -> usize {
    let mut found = 0;
    for s in students {
        let p = &s.proactiveness;
        for (name, value) in [
            ("bertanya", p.bertanya),
            ("menjawab", p.menjawab),
            ("menambahkan", p.menambahkan),
        ] {
            if value > total_meetings {
                warn!(
                    student = %s,
                    counter = name,
                    value,
                    total_meetings,
                    "proactiveness counter exceeds the number of meetings"
                );
                found += 1;
            }
        }
    }
    found
}

pub fn check_exam_bounds(students: &[Student]) -> usize {
    let mut found = 0;
    for s in students {
        for (idx, &exam) in s.exams.iter().enumerate() {
            if !(0.0..=100.0).contains(&exam) {
                warn!(student = %s, exam = idx + 1, value = exam, "exam result out of range");
                found += 1;
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Proactiveness, StudentId};

    #[test]
    fn test_unique_ids() {
        let roster = vec![
            Student::new(StudentId(1), "Ani", "01"),
            Student::new(StudentId(2), "Budi", "02"),
        ];
        assert!(ensure_unique_ids(&roster).is_ok());
        assert!(ensure_unique_ids(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let roster = vec![
            Student::new(StudentId(1), "Ani", "01"),
            Student::new(StudentId(1), "Budi", "02"),
        ];
        let err = ensure_unique_ids(&roster).unwrap_err();
        assert_eq!(
            err.to_string(),
            "students Ani (01) and Budi (02) share the same id 1"
        );
    }

    #[test]
    fn test_proactiveness_bounds() {
        let roster = vec![
            Student::new(StudentId(1), "Ani", "")
                .with_proactiveness(Proactiveness::new(17, 16, 20)),
            Student::new(StudentId(2), "Budi", "")
                .with_proactiveness(Proactiveness::new(0, 3, 16)),
        ];
        assert_eq!(check_proactiveness_bounds(&roster, 16), 2);
    }

    #[test]
    fn test_exam_bounds() {
        let roster = vec![
            Student::new(StudentId(1), "Ani", "").with_exams(&[100.0, 0.0, 101.0]),
            Student::new(StudentId(2), "Budi", "").with_exams(&[-1.0]),
        ];
        assert_eq!(check_exam_bounds(&roster), 2);
    }
}
