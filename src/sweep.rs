//! Window sweeps: how the outcome distribution moves with the search window.
//!
//! A sweep runs [`simulate_seeded`] once per window size and keeps the
//! headline numbers for each. For the classical policy the probability of
//! ending up with the best candidate peaks near `N / e`.

use std::ops::Range;

use crate::error::Result;
use crate::policy::AcceptancePolicy;
use crate::seed::window_seed;
use crate::simulate::{simulate_seeded, SimConfig};
use crate::stats::SimSummary;

/// Parameters for a window sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    pub population: usize,
    /// Window sizes to evaluate. Defaults to `1..population`.
    pub windows: Range<usize>,
    /// Trials per window.
    pub trials: usize,
    pub policy: AcceptancePolicy,
    pub seed: u64,
}

impl SweepConfig {
    /// Sweep every non-empty window `1..population`.
    pub fn new(population: usize) -> Self {
        Self {
            population,
            windows: 1..population,
            trials: 2_000,
            policy: AcceptancePolicy::classical(),
            seed: 0,
        }
    }

    pub fn with_windows(mut self, windows: Range<usize>) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_policy(mut self, policy: AcceptancePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(200)
    }
}

/// Summary for one window size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowPoint {
    pub window: usize,
    pub summary: SimSummary,
}

/// Ordered results of a sweep (ascending window).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSweep {
    pub population: usize,
    pub points: Vec<WindowPoint>,
}

impl WindowSweep {
    /// The window with the highest probability of best; ties go to the smaller window.
    pub fn best_window(&self) -> Option<&WindowPoint> {
        self.points.iter().fold(None, |best, p| match best {
            Some(b) if b.summary.p_best >= p.summary.p_best => Some(b),
            _ => Some(p),
        })
    }

    pub fn get(&self, window: usize) -> Option<&WindowPoint> {
        self.points.iter().find(|p| p.window == window)
    }
}

/// Run one seeded simulation per window in `cfg.windows`.
///
/// Each window gets its own seed derived from `cfg.seed`, so narrowing the
/// window range does not change the numbers for the windows that remain.
pub fn sweep_windows(cfg: &SweepConfig) -> Result<WindowSweep> {
    let mut points = Vec::with_capacity(cfg.windows.len());
    for window in cfg.windows.clone() {
        let sim_cfg = SimConfig {
            population: cfg.population,
            window,
            trials: cfg.trials,
            policy: cfg.policy,
            seed: window_seed(cfg.seed, window),
        };
        let summary = simulate_seeded(&sim_cfg)?.summary();
        tracing::debug!(
            window,
            p_best = summary.p_best,
            mean_stop = summary.mean_stop,
            "window evaluated"
        );
        points.push(WindowPoint { window, summary });
    }
    Ok(WindowSweep {
        population: cfg.population,
        points,
    })
}
