use crate::calc::StudentScores;
use crate::model::StudentId;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Distribution {
    pub mean: f64,
    pub median: f64,
}

impl Distribution {
    fn of(values: &[f64]) -> Distribution {
        if values.is_empty() {
            return Distribution::default();
        }
        Distribution {
            mean: values.iter().sum::<f64>() / values.len() as f64,
            median: median(values),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassStatistics {
    pub students: usize,
    pub exam_average: Distribution,
    pub task_score: Distribution,
    pub proactiveness: Distribution,
    pub summary: Distribution,
    pub top: Option<StudentId>,
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[(n / 2) - 1] + sorted[n / 2]) / 2.0
    }
}

/// Class-wide view of the per-student scores. The top student is the first
/// one in roster order among those with the best summary score.
pub fn class_statistics(scores: &[StudentScores]) -> ClassStatistics {
    let column = |f: fn(&StudentScores) -> f64| scores.iter().map(f).collect::<Vec<_>>();
    let top = scores
        .iter()
        .reduce(|best, s| if s.summary > best.summary { s } else { best })
        .map(|s| s.id);
    ClassStatistics {
        students: scores.len(),
        exam_average: Distribution::of(&column(|s| s.exam_average)),
        task_score: Distribution::of(&column(|s| s.task_score)),
        proactiveness: Distribution::of(&column(|s| s.proactiveness)),
        summary: Distribution::of(&column(|s| s.summary)),
        top,
    }
}
