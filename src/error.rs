//! Crate error type.

use thiserror::Error;

/// Errors raised by the trial engine and the Monte Carlo driver.
///
/// Every variant is a configuration problem or a bounded-search failure; the
/// stochastic branches of a trial never fail on their own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The search window leaves no candidate to choose from.
    #[error("search window {window} must be less than the population size {population}")]
    InvalidWindow { window: usize, population: usize },

    /// A `win == 0` scan reached the end of the leap sequence without a single acceptance.
    #[error("no candidate accepted after examining all {examined} candidates")]
    Exhausted { examined: usize },

    #[error("population must contain at least one candidate")]
    EmptyPopulation,

    #[error("quality at position {index} is not finite: {value}")]
    NonFiniteQuality { index: usize, value: f64 },

    /// An acceptance probability outside `[0, 1]` (or NaN).
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
