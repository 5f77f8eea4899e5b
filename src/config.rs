use crate::calc::{TOTAL_MEETINGS, Weights};
use crate::ranking::TiePolicy;
use eyre::{WrapErr, ensure};
use serde::Deserialize;
use std::path::Path;

const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scoring: Scoring,
    pub ranking: RankingConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scoring {
    pub exam_weight: f64,
    pub task_weight: f64,
    pub proactiveness_weight: f64,
    pub total_meetings: u32,
}

impl Default for Scoring {
    fn default() -> Self {
        let w = Weights::default();
        Scoring {
            exam_weight: w.exam,
            task_weight: w.task,
            proactiveness_weight: w.proactiveness,
            total_meetings: TOTAL_MEETINGS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub tie_policy: TiePolicy,
}

impl Config {
    pub fn load(file_name: &Path) -> eyre::Result<Config> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot read configuration file {}", file_name.display()))?;
        Self::parse(&content).wrap_err("cannot load configuration file")
    }

    pub fn parse(content: &str) -> eyre::Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> eyre::Result<()> {
        let s = &self.scoring;
        let weights = [s.exam_weight, s.task_weight, s.proactiveness_weight];
        ensure!(
            weights.iter().all(|w| w.is_finite() && *w >= 0.0),
            "scoring weights must be non-negative numbers, got {weights:?}"
        );
        let total = weights.iter().sum::<f64>();
        ensure!(
            (total - 1.0).abs() <= WEIGHT_TOLERANCE,
            "scoring weights must sum to 1, got {total}"
        );
        ensure!(
            s.total_meetings > 0,
            "scoring.total_meetings must be positive"
        );
        Ok(())
    }

    pub fn weights(&self) -> Weights {
        Weights {
            exam: self.scoring.exam_weight,
            task: self.scoring.task_weight,
            proactiveness: self.scoring.proactiveness_weight,
            total_meetings: self.scoring.total_meetings,
        }
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.ranking.tie_policy
    }
}
