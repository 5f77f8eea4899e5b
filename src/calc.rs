use crate::model::{Proactiveness, Student, StudentId, TaskRecord, TaskStatus};
use serde::Serialize;

/// Default number of observed meetings bounding each proactiveness counter.
pub const TOTAL_MEETINGS: u32 = 16;

/// Relative contribution of each sub-score to the summary score. The three
/// weights are expected to sum to 1, which `Config` enforces when loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub exam: f64,
    pub task: f64,
    pub proactiveness: f64,
    pub total_meetings: u32,
}

impl Default for Weights {
    /// Exams 50%, tasks 30%, proactiveness 20%.
    fn default() -> Self {
        Weights {
            exam: 0.5,
            task: 0.3,
            proactiveness: 0.2,
            total_meetings: TOTAL_MEETINGS,
        }
    }
}

impl Weights {
    /// Rank on exams alone.
    pub fn exam_only() -> Self {
        Weights {
            exam: 1.0,
            task: 0.0,
            proactiveness: 0.0,
            ..Weights::default()
        }
    }
}

/// Arithmetic mean of the exam results, or 0 when there are none.
pub fn exam_average(exams: &[f64]) -> f64 {
    if exams.is_empty() {
        0.0
    } else {
        exams.iter().sum::<f64>() / exams.len() as f64
    }
}

/// Average over graded and missing tasks, missing ones counting as zero.
/// Excused tasks are ignored. Returns 0 when nothing is left to average.
pub fn task_score(tasks: &[TaskRecord]) -> f64 {
    let mut denom: usize = 0;
    let mut sum: f64 = 0.0;
    for task in tasks {
        match task.status {
            TaskStatus::Graded(v) => {
                denom += 1;
                sum += v;
            }
            TaskStatus::Missing => denom += 1,
            TaskStatus::Excused => {}
        }
    }
    if denom > 0 { sum / denom as f64 } else { 0.0 }
}

/// Share of the meetings in which the student took part, on a 0-100 scale.
/// Each counter is capped at `total_meetings`.
pub fn proactiveness_score(p: &Proactiveness, total_meetings: u32) -> f64 {
    if total_meetings == 0 {
        return 0.0;
    }
    let observed: u64 = p
        .counters()
        .iter()
        .map(|&c| u64::from(c.min(total_meetings)))
        .sum();
    100.0 * observed as f64 / (3.0 * f64::from(total_meetings))
}

/// Weighted combination of the three sub-scores, clamped to `[0, 100]`.
pub fn summary_score(student: &Student, weights: &Weights) -> f64 {
    StudentScores::compute(student, weights).summary
}

/// VB6-compatible 1-decimal rounding: `Int(10*x + 0.5) / 10`.
pub fn round_off_1_decimal(x: f64) -> f64 {
    ((10.0 * x) + 0.5).floor() / 10.0
}

fn combine(exam: f64, task: f64, proactiveness: f64, weights: &Weights) -> f64 {
    let s = exam * weights.exam + task * weights.task + proactiveness * weights.proactiveness;
    // NaN and -0.0 both end up as 0.0.
    if s.is_nan() || s <= 0.0 { 0.0 } else { s.min(100.0) }
}

/// Every derived value for one student.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentScores {
    pub id: StudentId,
    pub exam_average: f64,
    pub task_score: f64,
    pub proactiveness: f64,
    pub summary: f64,
}

impl StudentScores {
    pub fn compute(student: &Student, weights: &Weights) -> StudentScores {
        let exam = exam_average(&student.exams);
        let task = task_score(&student.tasks);
        let proactiveness = proactiveness_score(&student.proactiveness, weights.total_meetings);
        StudentScores {
            id: student.id,
            exam_average: exam,
            task_score: task,
            proactiveness,
            summary: combine(exam, task, proactiveness, weights),
        }
    }
}

/// Scores for a whole roster, in roster order.
pub fn roster_scores(students: &[Student], weights: &Weights) -> Vec<StudentScores> {
    students
        .iter()
        .map(|s| StudentScores::compute(s, weights))
        .collect()
}
