use super::TaskRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Participation tallies, one increment per meeting where the student
/// asked, answered or added something.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proactiveness {
    pub bertanya: u32,
    pub menjawab: u32,
    pub menambahkan: u32,
}

impl Proactiveness {
    pub fn new(bertanya: u32, menjawab: u32, menambahkan: u32) -> Self {
        Self {
            bertanya,
            menjawab,
            menambahkan,
        }
    }

    pub fn counters(&self) -> [u32; 3] {
        [self.bertanya, self.menjawab, self.menambahkan]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    #[serde(default)]
    pub nim: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub exams: Vec<f64>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub proactiveness: Proactiveness,
}

impl Student {
    pub fn new(id: StudentId, name: &str, nim: &str) -> Student {
        Student {
            id,
            name: name.to_owned(),
            nim: nim.to_owned(),
            picture: None,
            exams: Vec::new(),
            tasks: Vec::new(),
            proactiveness: Proactiveness::default(),
        }
    }

    pub fn with_exams(self, exams: &[f64]) -> Student {
        Student {
            exams: exams.to_vec(),
            ..self
        }
    }

    pub fn with_tasks(self, tasks: Vec<TaskRecord>) -> Student {
        Student { tasks, ..self }
    }

    pub fn with_proactiveness(self, proactiveness: Proactiveness) -> Student {
        Student {
            proactiveness,
            ..self
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nim.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.nim)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let s = Student::new(StudentId(3), "Siti Rahma", "2101003");
        assert_eq!(s.to_string(), "Siti Rahma (2101003)");
        let s = Student { nim: String::new(), ..s };
        assert_eq!(s.to_string(), "Siti Rahma");
    }

    #[test]
    fn test_deserialize_defaults() {
        let s: Student = toml::from_str(
            r#"
            id = 7
            name = "Budi"
            exams = [80.0, 90.0]
            "#,
        )
        .unwrap();
        assert_eq!(s.id, StudentId(7));
        assert_eq!(s.exams, vec![80.0, 90.0]);
        assert!(s.tasks.is_empty());
        assert_eq!(s.proactiveness, Proactiveness::default());
    }
}
