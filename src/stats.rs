//! Statistics over trial results.
//!
//! All helpers return `0.0` on empty input rather than dividing by zero.

/// Fraction of trials that ended with the overall best candidate (`rank == 1`).
#[must_use]
pub fn probability_of_best(ranks: &[usize]) -> f64 {
    fraction(ranks, |r| r == 1)
}

/// Fraction of trials whose rank is strictly below `x / 100 * n`.
///
/// The inequality is strict: a rank sitting exactly on the cutoff does not
/// count. `probability_of_top_percentile(1.0, 100, &[1])` is `0.0`, and rank
/// `n` is excluded at `x = 100`.
#[must_use]
pub fn probability_of_top_percentile(x: f64, n: usize, ranks: &[usize]) -> f64 {
    let cutoff = x / 100.0 * n as f64;
    fraction(ranks, |r| (r as f64) < cutoff)
}

/// Mean number of candidates evaluated before the decision process stopped.
#[must_use]
pub fn mean_search_length(stops: &[usize]) -> f64 {
    if stops.is_empty() {
        return 0.0;
    }
    stops.iter().map(|&s| s as f64).sum::<f64>() / stops.len() as f64
}

fn fraction(ranks: &[usize], mut pred: impl FnMut(usize) -> bool) -> f64 {
    if ranks.is_empty() {
        return 0.0;
    }
    let hits = ranks.iter().filter(|&&r| pred(r)).count();
    hits as f64 / ranks.len() as f64
}

/// Headline numbers for one Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSummary {
    pub trials: usize,
    pub p_best: f64,
    pub p_top5: f64,
    pub p_top10: f64,
    pub mean_stop: f64,
}

impl SimSummary {
    /// Summarize paired rank/stop sequences for a population of size `n`.
    pub fn from_results(n: usize, ranks: &[usize], stops: &[usize]) -> Self {
        Self {
            trials: ranks.len(),
            p_best: probability_of_best(ranks),
            p_top5: probability_of_top_percentile(5.0, n, ranks),
            p_top10: probability_of_top_percentile(10.0, n, ranks),
            mean_stop: mean_search_length(stops),
        }
    }
}
