use polynest::nfp::NfpKind;
use polynest::{NestError, Result};
use serde::{Deserialize, Serialize};

/// Configuration of a nesting run. Missing fields in a JSON config take their default value.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct NestingConfig {
    /// Minimum clearance around every part. Each contour is offset outwards by this value before nesting.
    /// A negative value shrinks the contours instead, parts that vanish are skipped
    pub spacing: f64,
    /// Step (in degrees) by which the rotation refiner turns parts in either direction
    pub rotation_step: f64,
    /// Number of consecutive restart rounds without improvement after which the search stops
    pub max_no_improvement: usize,
    /// Strategy used to generate candidate positions
    pub nfp_strategy: NfpKind,
    /// Whether candidate positions must lie within the sheet
    pub sheet_policy: SheetPolicy,
    /// What to do with a part for which no free position is found
    pub fallback_policy: FallbackPolicy,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Hard cap on the number of restart rounds
    pub max_rounds: Option<usize>,
    /// Wall-clock budget in seconds, checked once per restart round
    pub time_limit_secs: Option<f64>,
    /// Cap on the number of sweeps of the rotation refiner per round
    pub max_refine_sweeps: Option<usize>,
    /// Evaluate the candidate positions of a part in parallel. Does not change the outcome
    pub parallel_candidates: bool,
}

impl Default for NestingConfig {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            rotation_step: 15.0,
            max_no_improvement: 5,
            nfp_strategy: NfpKind::MinkowskiHull,
            sheet_policy: SheetPolicy::Unbounded,
            fallback_policy: FallbackPolicy::Origin,
            prng_seed: None,
            max_rounds: None,
            time_limit_secs: None,
            max_refine_sweeps: None,
            parallel_candidates: false,
        }
    }
}

impl NestingConfig {
    /// Checks the configuration before any search starts.
    pub fn validate(&self) -> Result<()> {
        let err = |msg: String| Err(NestError::Configuration(msg));
        if !self.spacing.is_finite() {
            return err(format!("spacing must be finite, got {}", self.spacing));
        }
        if !(self.rotation_step.is_finite() && self.rotation_step > 0.0) {
            return err(format!(
                "rotation step must be positive, got {}",
                self.rotation_step
            ));
        }
        if self.max_no_improvement == 0 {
            return err("max_no_improvement must be at least 1".into());
        }
        if self.max_rounds == Some(0) {
            return err("max_rounds must be at least 1".into());
        }
        if let Some(t) = self.time_limit_secs {
            if !(t.is_finite() && t > 0.0) {
                return err(format!("time limit must be positive, got {t}"));
            }
        }
        Ok(())
    }
}

/// Treatment of the sheet boundary during the placement search.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SheetPolicy {
    /// Only the bounding box area is minimized, parts may extend beyond the sheet
    #[default]
    Unbounded,
    /// Candidate positions outside of the sheet are rejected
    Contain,
}

/// Treatment of a part for which the placement search finds no valid position.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Put the part at the origin regardless, it may overlap other parts
    #[default]
    Origin,
    /// Abort the run with [`NestError::PlacementExhausted`]
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(NestingConfig { rotation_step: 0.0, ..Default::default() }; "zero rotation step")]
    #[test_case(NestingConfig { rotation_step: f64::NAN, ..Default::default() }; "nan rotation step")]
    #[test_case(NestingConfig { max_no_improvement: 0, ..Default::default() }; "zero restart budget")]
    #[test_case(NestingConfig { spacing: f64::INFINITY, ..Default::default() }; "infinite spacing")]
    #[test_case(NestingConfig { max_rounds: Some(0), ..Default::default() }; "zero rounds")]
    #[test_case(NestingConfig { time_limit_secs: Some(-2.0), ..Default::default() }; "negative time limit")]
    fn invalid_configs_fail_fast(config: NestingConfig) {
        assert!(matches!(config.validate(), Err(NestError::Configuration(_))));
    }

    #[test]
    fn partial_json_config_uses_defaults() {
        let config: NestingConfig =
            serde_json::from_str(r#"{"spacing": 0.5, "nfp_strategy": "difference", "sheet_policy": "contain"}"#)
                .unwrap();
        assert_eq!(config.spacing, 0.5);
        assert_eq!(config.nfp_strategy, NfpKind::Difference);
        assert_eq!(config.sheet_policy, SheetPolicy::Contain);
        assert_eq!(config.rotation_step, 15.0);
        assert_eq!(config.max_no_improvement, 5);
        assert!(config.validate().is_ok());
    }
}
