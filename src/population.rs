//! Candidate populations.
//!
//! A [`Population`] is an arrival-ordered sequence of finite quality scores.
//! Higher is better. Values are assumed distinct (they are drawn from a
//! continuous distribution); under exact ties a value ranks at the best
//! position among its equals.

use rand::Rng;

use crate::error::{Error, Result};

/// Arrival-ordered quality scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    quality: Vec<f64>,
}

impl Population {
    /// Wrap caller-provided scores. Rejects an empty sequence and non-finite values.
    pub fn from_values(quality: Vec<f64>) -> Result<Self> {
        if quality.is_empty() {
            return Err(Error::EmptyPopulation);
        }
        if let Some((index, &value)) = quality.iter().enumerate().find(|(_, q)| !q.is_finite()) {
            return Err(Error::NonFiniteQuality { index, value });
        }
        Ok(Self { quality })
    }

    /// Draw `n` scores i.i.d. uniform on `[0, 1)`.
    pub fn uniform<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyPopulation);
        }
        let quality = (0..n).map(|_| rng.random::<f64>()).collect();
        Ok(Self { quality })
    }

    pub fn len(&self) -> usize {
        self.quality.len()
    }

    /// Always false for a constructed population; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.quality.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.quality
    }

    /// Split into `(search window, leap sequence)`.
    ///
    /// Fails with [`Error::InvalidWindow`] when the leap sequence would be empty.
    pub fn split(&self, window: usize) -> Result<(&[f64], &[f64])> {
        if window >= self.quality.len() {
            return Err(Error::InvalidWindow {
                window,
                population: self.quality.len(),
            });
        }
        Ok(self.quality.split_at(window))
    }

    /// Lowest quality in the population.
    pub fn worst(&self) -> f64 {
        self.quality.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// 1-based position of `value` in the population sorted by descending quality.
    pub fn rank_of(&self, value: f64) -> usize {
        1 + self.quality.iter().filter(|&&q| q > value).count()
    }

    /// Arrival positions ordered by descending quality (stable on ties).
    pub fn descending_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.quality.len()).collect();
        order.sort_by(|&a, &b| self.quality[b].total_cmp(&self.quality[a]));
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rank_is_one_based_descending() {
        let p = Population::from_values(vec![0.3, 0.9, 0.1, 0.5]).unwrap();
        assert_eq!(p.rank_of(0.9), 1);
        assert_eq!(p.rank_of(0.5), 2);
        assert_eq!(p.rank_of(0.3), 3);
        assert_eq!(p.rank_of(0.1), 4);
        assert_eq!(p.rank_of(p.worst()), p.len());
    }

    #[test]
    fn descending_order_lists_positions_best_first() {
        let p = Population::from_values(vec![0.3, 0.9, 0.1, 0.5]).unwrap();
        assert_eq!(p.descending_order(), vec![1, 3, 0, 2]);
    }

    #[test]
    fn split_requires_non_empty_leap() {
        let p = Population::from_values(vec![0.1, 0.2, 0.3]).unwrap();
        let (look, leap) = p.split(2).unwrap();
        assert_eq!(look, &[0.1, 0.2]);
        assert_eq!(leap, &[0.3]);
        assert_eq!(
            p.split(3),
            Err(Error::InvalidWindow {
                window: 3,
                population: 3
            })
        );
    }

    #[test]
    fn rejects_empty_and_non_finite() {
        assert_eq!(Population::from_values(vec![]), Err(Error::EmptyPopulation));
        assert!(matches!(
            Population::from_values(vec![0.1, f64::NAN]),
            Err(Error::NonFiniteQuality { index: 1, .. })
        ));
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Population::uniform(0, &mut rng), Err(Error::EmptyPopulation));
    }

    #[test]
    fn uniform_draws_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        let p = Population::uniform(500, &mut rng).unwrap();
        assert_eq!(p.len(), 500);
        assert!(p.values().iter().all(|q| (0.0..1.0).contains(q)));
    }
}
