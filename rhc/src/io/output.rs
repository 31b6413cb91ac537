use polynest::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::NestSolution;
use crate::Termination;
use crate::config::NestingConfig;

/// Everything written to the solution file: the instance, the layout, the configuration and some statistics.
#[derive(Serialize, Deserialize, Clone)]
pub struct RHCOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: NestingConfig,
    pub stats: RunStats,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RunStats {
    pub termination: Termination,
    pub n_rounds: usize,
    pub run_time_ms: u64,
    /// Best bounding box area after every round
    pub score_history: Vec<f64>,
}

impl From<&NestSolution> for RunStats {
    fn from(sol: &NestSolution) -> Self {
        RunStats {
            termination: sol.termination,
            n_rounds: sol.n_rounds,
            run_time_ms: sol.run_time.as_millis() as u64,
            score_history: sol.score_history.clone(),
        }
    }
}
