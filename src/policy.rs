//! Acceptance policy: how candidates answer a proposal.
//!
//! Two independent Bernoulli parameters:
//! - `p_accept`: chance a qualifying candidate accepts an immediate proposal.
//! - `p_belated_accept`: chance a previously passed-over candidate accepts a
//!   late proposal, used only after the leap sequence is exhausted.
//!
//! Both are validated once, up front, so the trial engine never has to handle
//! a malformed coin.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use crate::error::{Error, Result};

/// Validated pair of acceptance probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptancePolicy {
    p_accept: f64,
    p_belated_accept: f64,
}

impl AcceptancePolicy {
    /// Build a policy, rejecting probabilities outside `[0, 1]` (and NaN).
    pub fn new(p_accept: f64, p_belated_accept: f64) -> Result<Self> {
        Ok(Self {
            p_accept: check_probability("p_accept", p_accept)?,
            p_belated_accept: check_probability("p_belated_accept", p_belated_accept)?,
        })
    }

    /// Candidates always say yes and nobody is ever revisited: the classical problem.
    pub fn classical() -> Self {
        Self {
            p_accept: 1.0,
            p_belated_accept: 0.0,
        }
    }

    pub fn p_accept(&self) -> f64 {
        self.p_accept
    }

    pub fn p_belated_accept(&self) -> f64 {
        self.p_belated_accept
    }

    /// True when exhausting the leap sequence can still lead to a late proposal.
    pub fn allows_belated(&self) -> bool {
        self.p_belated_accept > 0.0
    }

    pub(crate) fn coins(&self) -> Result<Coins> {
        Ok(Coins {
            accept: Bernoulli::new(self.p_accept).map_err(|_| Error::InvalidProbability {
                name: "p_accept",
                value: self.p_accept,
            })?,
            belated: Bernoulli::new(self.p_belated_accept).map_err(|_| {
                Error::InvalidProbability {
                    name: "p_belated_accept",
                    value: self.p_belated_accept,
                }
            })?,
        })
    }
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self::classical()
    }
}

/// The two Bernoulli samplers a trial flips.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Coins {
    accept: Bernoulli,
    belated: Bernoulli,
}

impl Coins {
    pub(crate) fn accepts<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        self.accept.sample(rng)
    }

    pub(crate) fn accepts_belated<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        self.belated.sample(rng)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidProbability { name, value })
    }
}
