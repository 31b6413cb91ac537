use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thousands::Separable;

use polynest::entities::{BufferedPart, Layout, Part, Placement, Sheet, SkippedPart};
use polynest::geometry::DTransformation;
use polynest::util::assertions;
use polynest::{NestError, Result};

use crate::config::{FallbackPolicy, NestingConfig};
use crate::opt::refine::RotationRefiner;
use crate::opt::score::LayoutScore;
use crate::opt::search::PlacementSearch;

/// Why the restart loop stopped.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// `max_no_improvement` consecutive rounds did not improve the best layout
    Converged,
    /// The configured maximum number of rounds was reached
    RoundLimit,
    /// The configured time limit expired
    Timeout,
    /// The run was cancelled from the outside
    Cancelled,
}

/// The outcome of a nesting run: the best layout found and how the search went.
#[derive(Debug, Clone)]
pub struct NestSolution {
    pub layout: Layout,
    pub termination: Termination,
    /// Number of restart rounds executed
    pub n_rounds: usize,
    /// Best score after every round, non-increasing
    pub score_history: Vec<f64>,
    pub run_time: Duration,
}

/// Restart hill-climb nester.
///
/// Every round shuffles the parts, places them one by one with the [`PlacementSearch`]
/// and polishes the result with the [`RotationRefiner`]. The best layout over all rounds is kept.
pub struct Nester {
    pub parts: Vec<Part>,
    pub sheet: Sheet,
    pub config: NestingConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    cancel: Option<Arc<AtomicBool>>,
}

impl Nester {
    /// Creates a nester, failing fast on an invalid sheet or configuration.
    /// The PRNG is seeded from `config.prng_seed`, or from entropy if absent.
    pub fn new(parts: Vec<Part>, sheet: Sheet, config: NestingConfig) -> Result<Self> {
        sheet.validate()?;
        config.validate()?;
        let rng = match config.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self {
            parts,
            sheet,
            config,
            rng,
            cancel: None,
        })
    }

    /// Replaces the random source used to shuffle the parts.
    pub fn with_rng(mut self, rng: SmallRng) -> Self {
        self.rng = rng;
        self
    }

    /// The run stops at the end of the current round once `flag` is set.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn solve(&mut self) -> Result<NestSolution> {
        let start = Instant::now();
        let (buffered, skipped) = self.buffer_parts();

        if buffered.is_empty() {
            info!("[NEST] nothing to nest ({} parts skipped)", skipped.len());
            let mut layout = Layout::empty(self.sheet);
            layout.skipped = skipped;
            return Ok(NestSolution {
                layout,
                termination: Termination::Converged,
                n_rounds: 0,
                score_history: vec![],
                run_time: start.elapsed(),
            });
        }

        let search = PlacementSearch::from_config(&self.config, self.sheet.rect());
        let refiner = RotationRefiner::new(
            &search,
            self.config.rotation_step,
            self.config.max_refine_sweeps,
        );
        let deadline = self
            .config
            .time_limit_secs
            .map(|secs| start + Duration::from_secs_f64(secs));

        let mut order = (0..buffered.len()).collect::<Vec<_>>();
        let mut best: Option<Vec<Placement>> = None;
        let mut best_score = LayoutScore::WORST;
        let mut no_improvement = 0;
        let mut n_rounds = 0;
        let mut n_accepted_rotations = 0;
        let mut score_history = vec![];

        let termination = loop {
            order.shuffle(&mut self.rng);
            let placements = self.construct(&search, &buffered, &order)?;
            let refined = refiner.refine(&buffered, placements);
            n_accepted_rotations += refined.n_accepted;
            let score = LayoutScore::from_shapes(refined.placements.iter().map(|p| p.shape.as_ref()));
            n_rounds += 1;

            if score < best_score {
                info!(
                    "[NEST] round {n_rounds}: improved {:.3} -> {:.3}",
                    best_score.area(),
                    score.area()
                );
                best_score = score;
                best = Some(refined.placements);
                no_improvement = 0;
            } else {
                no_improvement += 1;
                debug!(
                    "[NEST] round {n_rounds}: {:.3} does not improve on {:.3} ({no_improvement}/{})",
                    score.area(),
                    best_score.area(),
                    self.config.max_no_improvement
                );
            }
            score_history.push(best_score.area());

            if no_improvement >= self.config.max_no_improvement {
                break Termination::Converged;
            }
            if self.config.max_rounds.is_some_and(|max| n_rounds >= max) {
                break Termination::RoundLimit;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break Termination::Timeout;
            }
            if self.cancel.as_ref().is_some_and(|c| c.load(Ordering::Relaxed)) {
                break Termination::Cancelled;
            }
        };

        let placements = best.expect("at least one round is executed");
        let mut layout = Layout::new(self.sheet, placements).normalized();
        layout.skipped = skipped;

        debug_assert!(assertions::layout_parts_unique(&layout));
        debug_assert!(assertions::layout_is_overlap_free_besides_fallbacks(&layout));

        let run_time = start.elapsed();
        info!(
            "[NEST] finished after {} rounds ({:?}) in {:.3}ms, {} rotations accepted",
            n_rounds.separate_with_commas(),
            termination,
            run_time.as_secs_f64() * 1000.0,
            n_accepted_rotations.separate_with_commas()
        );
        info!(
            "[NEST] best layout: {} parts, bounding box area {:.3}, {} fallback placements",
            layout.len(),
            layout.bbox_area(),
            layout.n_fallbacks()
        );

        Ok(NestSolution {
            layout,
            termination,
            n_rounds,
            score_history,
            run_time,
        })
    }

    /// Applies the spacing to every part. Parts that cannot be buffered are skipped.
    fn buffer_parts(&self) -> (Vec<BufferedPart>, Vec<SkippedPart>) {
        let mut buffered = vec![];
        let mut skipped = vec![];
        for (idx, part) in self.parts.iter().enumerate() {
            let reason = match BufferedPart::derive(idx, part, self.config.spacing) {
                Ok(Some(bp)) => {
                    buffered.push(bp);
                    continue;
                }
                Ok(None) => format!("collapsed by a spacing of {}", self.config.spacing),
                Err(e) => e.to_string(),
            };
            warn!("[NEST] skipping part {}: {reason}", part.id);
            skipped.push(SkippedPart {
                id: part.id.clone(),
                reason,
            });
        }
        (buffered, skipped)
    }

    /// Places all parts sequentially in the given order.
    fn construct(
        &self,
        search: &PlacementSearch,
        buffered: &[BufferedPart],
        order: &[usize],
    ) -> Result<Vec<Placement>> {
        let mut placements: Vec<Placement> = Vec::with_capacity(order.len());
        for &i in order {
            let part = &buffered[i];
            let placement = search.place(part, &part.shape, DTransformation::empty(), &placements);
            if placement.fallback && self.config.fallback_policy == FallbackPolicy::Fail {
                return Err(NestError::PlacementExhausted {
                    part_id: part.id.clone(),
                });
            }
            debug!(
                "[NEST] placed part {} ({}/{}) at [{}]",
                part.id,
                placements.len() + 1,
                order.len(),
                placement.d_transf
            );
            placements.push(placement);
        }
        Ok(placements)
    }
}

/// Nests `parts` on `sheet`, returning the best layout found.
pub fn nest(parts: &[Part], sheet: Sheet, config: &NestingConfig) -> Result<Layout> {
    let mut nester = Nester::new(parts.to_vec(), sheet, *config)?;
    nester.solve().map(|s| s.layout)
}
