use crate::calc::{StudentScores, Weights, roster_scores};
use crate::model::{Student, StudentId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

/// How students with equal summary scores are ranked.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    /// Ties keep their roster order, ranks are exactly `1..=N`.
    #[default]
    Stable,
    /// Ties share the best rank of their group and the next group skips
    /// accordingly ("1, 2, 2, 4").
    Competition,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedStudent {
    pub rank: usize,
    pub id: StudentId,
    pub summary: f64,
}

/// Outcome of ranking a roster. Entries are stored best first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<RankedStudent>,
    by_id: HashMap<StudentId, usize>,
}

impl Ranking {
    pub fn entries(&self) -> &[RankedStudent] {
        &self.entries
    }

    /// 1-based rank of a student, if it belongs to the ranked roster.
    pub fn rank_of(&self, student: StudentId) -> Option<usize> {
        self.by_id.get(&student).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_map(self) -> HashMap<StudentId, usize> {
        self.by_id
    }
}

/// Rank a roster by summary score, best first.
///
/// Student ids are expected to be unique. With duplicates every entry is
/// still ranked, but the id lookup keeps the rank of the last one.
pub fn rank(students: &[Student], weights: &Weights, policy: TiePolicy) -> Ranking {
    rank_scores(&roster_scores(students, weights), policy)
}

/// Rank already computed scores. The order of `scores` is the roster order
/// used to break ties under [`TiePolicy::Stable`]. Ids must be unique for
/// `rank_of` and `into_map` to cover every entry, see [`rank`].
pub fn rank_scores(scores: &[StudentScores], policy: TiePolicy) -> Ranking {
    let mut order = scores.iter().collect::<Vec<_>>();
    // `sort_by` is stable, equal scores stay in roster order.
    order.sort_by(|a, b| b.summary.total_cmp(&a.summary));
    let mut entries: Vec<RankedStudent> = Vec::with_capacity(order.len());
    for (position, s) in order.into_iter().enumerate() {
        let rank = match (policy, entries.last()) {
            (TiePolicy::Competition, Some(previous)) if previous.summary == s.summary => {
                previous.rank
            }
            _ => position + 1,
        };
        trace!(student = %s.id, summary = s.summary, rank, "ranked student");
        entries.push(RankedStudent {
            rank,
            id: s.id,
            summary: s.summary,
        });
    }
    let by_id = entries.iter().map(|e| (e.id, e.rank)).collect();
    Ranking { entries, by_id }
}
