use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Scored on the 0-100 scale.
    Graded(f64),
    /// Not handed in; counts as a zero.
    Missing,
    /// Left out of the task score entirely.
    Excused,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub title: String,
    pub status: TaskStatus,
}

impl TaskRecord {
    pub fn graded(title: &str, score: f64) -> TaskRecord {
        TaskRecord {
            title: title.to_owned(),
            status: TaskStatus::Graded(score),
        }
    }

    pub fn missing(title: &str) -> TaskRecord {
        TaskRecord {
            title: title.to_owned(),
            status: TaskStatus::Missing,
        }
    }

    pub fn excused(title: &str) -> TaskRecord {
        TaskRecord {
            title: title.to_owned(),
            status: TaskStatus::Excused,
        }
    }
}
