//! Trial engine: one pass of the look-then-leap decision process.
//!
//! A trial observes the first `window` candidates without choosing, sets the
//! benchmark to the best of them, then proposes to every later candidate who
//! beats the benchmark until one accepts. Proposals can be declined. If the
//! whole leap sequence passes without an acceptance, the decision-maker may go
//! back (belated acceptance) to candidates who were never proposed to, best
//! first; if that fails too, they end up with the worst candidate.
//!
//! Edge cases:
//! - `window == 0`: no benchmark, everyone qualifies. The scan is bounded by
//!   the leap sequence; a scan where nobody accepts is [`Error::Exhausted`].
//! - `window >= len`: [`Error::InvalidWindow`].
//! - The benchmark is never raised by a candidate who declined.

use rand::Rng;

use crate::error::{Error, Result};
use crate::policy::{AcceptancePolicy, Coins};
use crate::population::Population;

/// State of the choice during a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Choice {
    Pending,
    Chosen(f64),
}

impl Choice {
    pub fn is_chosen(&self) -> bool {
        matches!(self, Choice::Chosen(_))
    }
}

/// How the final candidate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChoiceSource {
    /// Accepted a proposal during the leap scan.
    Immediate,
    /// Accepted a late proposal after the leap scan came up empty.
    Belated,
    /// Nobody accepted; settled for the worst candidate.
    Fallback,
}

/// Outcome of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialResult {
    /// Global rank of the chosen candidate (1 = best).
    pub rank: usize,
    /// 1-based position of the last candidate visited during the scan.
    pub stopping_index: usize,
    pub source: ChoiceSource,
    /// Proposals declined during the scan.
    pub declined: usize,
}

impl TrialResult {
    /// `(rank, stopping_index)`, the pair downstream statistics consume.
    pub fn pair(&self) -> (usize, usize) {
        (self.rank, self.stopping_index)
    }
}

struct Scan {
    choice: Choice,
    stopping_index: usize,
    // Arrival positions, pushed in scan order (so always sorted).
    rejections: Vec<usize>,
}

/// Run one trial over `population` with a search window of `window` candidates.
pub fn run_trial<R: Rng + ?Sized>(
    population: &Population,
    window: usize,
    policy: &AcceptancePolicy,
    rng: &mut R,
) -> Result<TrialResult> {
    let (look, leap) = population.split(window)?;
    let coins = policy.coins()?;

    let scan = if look.is_empty() {
        scan_without_benchmark(leap, &coins, rng)?
    } else {
        scan_against_benchmark(look, leap, &coins, rng)
    };

    let (value, source) = match scan.choice {
        Choice::Chosen(value) => (value, ChoiceSource::Immediate),
        Choice::Pending => settle_exhausted(population, &scan.rejections, policy, &coins, rng),
    };

    Ok(TrialResult {
        rank: population.rank_of(value),
        stopping_index: scan.stopping_index,
        source,
        declined: scan.rejections.len(),
    })
}

/// [`run_trial`] over raw scores, returning `(rank, stopping_index)`.
pub fn trial_pair<R: Rng + ?Sized>(
    values: &[f64],
    window: usize,
    p_accept: f64,
    p_belated_accept: f64,
    rng: &mut R,
) -> Result<(usize, usize)> {
    let population = Population::from_values(values.to_vec())?;
    let policy = AcceptancePolicy::new(p_accept, p_belated_accept)?;
    Ok(run_trial(&population, window, &policy, rng)?.pair())
}

fn scan_without_benchmark<R: Rng + ?Sized>(
    leap: &[f64],
    coins: &Coins,
    rng: &mut R,
) -> Result<Scan> {
    let mut rejections = Vec::new();
    for (i, &quality) in leap.iter().enumerate() {
        if coins.accepts(rng) {
            return Ok(Scan {
                choice: Choice::Chosen(quality),
                stopping_index: i + 1,
                rejections,
            });
        }
        rejections.push(i);
    }
    Err(Error::Exhausted {
        examined: leap.len(),
    })
}

fn scan_against_benchmark<R: Rng + ?Sized>(
    look: &[f64],
    leap: &[f64],
    coins: &Coins,
    rng: &mut R,
) -> Scan {
    let window = look.len();
    let benchmark = look.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut choice = Choice::Pending;
    let mut rejections = Vec::new();
    let mut last = 0;
    for (i, &quality) in leap.iter().enumerate() {
        last = i;
        if quality <= benchmark {
            continue;
        }
        if coins.accepts(rng) {
            choice = Choice::Chosen(quality);
            break;
        }
        rejections.push(window + i);
    }

    Scan {
        choice,
        stopping_index: window + 1 + last,
        rejections,
    }
}

/// Belated-acceptance phase: walk everyone not already declined, best first.
fn settle_exhausted<R: Rng + ?Sized>(
    population: &Population,
    rejections: &[usize],
    policy: &AcceptancePolicy,
    coins: &Coins,
    rng: &mut R,
) -> (f64, ChoiceSource) {
    if policy.allows_belated() {
        let values = population.values();
        let pool = population
            .descending_order()
            .into_iter()
            .filter(|pos| rejections.binary_search(pos).is_err());
        for pos in pool {
            if coins.accepts_belated(rng) {
                return (values[pos], ChoiceSource::Belated);
            }
        }
    }
    (population.worst(), ChoiceSource::Fallback)
}
