//! Monte Carlo driver.
//!
//! Runs many independent trials, each over a freshly drawn uniform population,
//! and collects ranks and stopping indices pairwise (`ranks[i]` and `stops[i]`
//! come from the same trial).
//!
//! Two entry points:
//! - [`simulate`]: one caller-owned RNG stream, trials run in order.
//! - [`simulate_seeded`]: one RNG per trial derived from `(seed, index)`.
//!   Under the `parallel` feature the trials run on rayon and produce the
//!   same sequences as the sequential build.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::policy::AcceptancePolicy;
use crate::population::Population;
use crate::seed::trial_seed;
use crate::stats::SimSummary;
use crate::trial::{run_trial, TrialResult};

/// Parameters for a seeded Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Population size `N`.
    pub population: usize,
    /// Search window size, `0 <= window < population`.
    pub window: usize,
    /// Number of independent trials.
    pub trials: usize,
    pub policy: AcceptancePolicy,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population: 200,
            window: 74,
            trials: 2_000,
            policy: AcceptancePolicy::classical(),
            seed: 0,
        }
    }
}

impl SimConfig {
    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
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

    /// Check everything a trial would otherwise fail on, before running any.
    pub fn validate(&self) -> Result<()> {
        validate(self.population, self.window)
    }
}

/// Paired results of a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Simulation {
    pub population: usize,
    pub window: usize,
    pub ranks: Vec<usize>,
    pub stops: Vec<usize>,
}

impl Simulation {
    fn with_capacity(population: usize, window: usize, trials: usize) -> Self {
        Self {
            population,
            window,
            ranks: Vec::with_capacity(trials),
            stops: Vec::with_capacity(trials),
        }
    }

    fn push(&mut self, result: TrialResult) {
        self.ranks.push(result.rank);
        self.stops.push(result.stopping_index);
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn summary(&self) -> SimSummary {
        SimSummary::from_results(self.population, &self.ranks, &self.stops)
    }

    /// Split into `(ranks, stops)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.ranks, self.stops)
    }
}

/// Run `trials` independent trials drawing from the caller's RNG stream.
pub fn simulate<R: Rng + ?Sized>(
    population: usize,
    window: usize,
    trials: usize,
    policy: &AcceptancePolicy,
    rng: &mut R,
) -> Result<Simulation> {
    validate(population, window)?;
    tracing::debug!(population, window, trials, "simulation started");

    let mut sim = Simulation::with_capacity(population, window, trials);
    for trial in 0..trials {
        let result = one_trial(population, window, policy, rng).inspect_err(|e| {
            tracing::warn!(trial, error = %e, "trial failed");
        })?;
        sim.push(result);
    }

    tracing::debug!(population, window, trials, "simulation finished");
    Ok(sim)
}

/// Run `cfg.trials` trials, each with its own RNG derived from `cfg.seed`.
pub fn simulate_seeded(cfg: &SimConfig) -> Result<Simulation> {
    cfg.validate()?;
    tracing::debug!(
        population = cfg.population,
        window = cfg.window,
        trials = cfg.trials,
        seed = cfg.seed,
        "seeded simulation started"
    );

    let results = run_seeded_trials(cfg)?;
    let mut sim = Simulation::with_capacity(cfg.population, cfg.window, cfg.trials);
    for result in results {
        sim.push(result);
    }

    tracing::debug!(
        population = cfg.population,
        window = cfg.window,
        trials = cfg.trials,
        "seeded simulation finished"
    );
    Ok(sim)
}

fn seeded_trial(cfg: &SimConfig, index: usize) -> Result<TrialResult> {
    let mut rng = StdRng::seed_from_u64(trial_seed(cfg.seed, index as u64));
    one_trial(cfg.population, cfg.window, &cfg.policy, &mut rng).inspect_err(|e| {
        tracing::warn!(trial = index, error = %e, "trial failed");
    })
}

#[cfg(not(feature = "parallel"))]
fn run_seeded_trials(cfg: &SimConfig) -> Result<Vec<TrialResult>> {
    (0..cfg.trials).map(|i| seeded_trial(cfg, i)).collect()
}

#[cfg(feature = "parallel")]
fn run_seeded_trials(cfg: &SimConfig) -> Result<Vec<TrialResult>> {
    use rayon::prelude::*;
    (0..cfg.trials)
        .into_par_iter()
        .map(|i| seeded_trial(cfg, i))
        .collect()
}

fn one_trial<R: Rng + ?Sized>(
    population: usize,
    window: usize,
    policy: &AcceptancePolicy,
    rng: &mut R,
) -> Result<TrialResult> {
    let pop = Population::uniform(population, rng)?;
    let result = run_trial(&pop, window, policy, rng)?;
    tracing::trace!(
        rank = result.rank,
        stop = result.stopping_index,
        source = ?result.source,
        "trial finished"
    );
    Ok(result)
}

fn validate(population: usize, window: usize) -> Result<()> {
    if population == 0 {
        return Err(Error::EmptyPopulation);
    }
    if window >= population {
        return Err(Error::InvalidWindow { window, population });
    }
    Ok(())
}
