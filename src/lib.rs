//! Turn per-student exam results, task records and proactiveness counters
//! into comparable scores and a class ranking.

pub mod calc;
pub mod checks;
pub mod config;
pub mod display;
pub mod loaders;
pub mod model;
pub mod ranking;
pub mod stats;

pub use crate::calc::{StudentScores, Weights, exam_average, summary_score, task_score};
pub use crate::model::{Proactiveness, Student, StudentId, TaskRecord, TaskStatus};
pub use crate::ranking::{Ranking, TiePolicy, rank};
