//! `secretary`: Monte Carlo simulation of the secretary problem under relaxed assumptions.
//!
//! A decision-maker sees candidates one at a time and must accept or pass on
//! each, irrevocably. The classical strategy observes the first `window`
//! candidates without choosing (the search window), then proposes to the first
//! later candidate who beats all of them. This crate relaxes two assumptions:
//!
//! - a proposal can be **declined** (`p_accept < 1`), after which the scan
//!   continues against the same benchmark;
//! - once the scan runs out, the decision-maker may **go back** to candidates
//!   they never proposed to, best first, each of whom accepts with
//!   `p_belated_accept`.
//!
//! Each trial yields the chosen candidate's global rank (1 = best) and the
//! position at which the scan stopped. The Monte Carlo driver repeats this over
//! freshly drawn populations.
//!
//! **Goals:**
//! - **Reproducible**: every random draw comes from an injected RNG; seeded runs
//!   derive one RNG per trial, so results do not depend on execution order.
//! - **Total**: configuration errors are reported before any trial runs; the
//!   only in-trial failure is a bounded `window == 0` scan with no acceptance
//!   ([`Error::Exhausted`]).
//!
//! **API:**
//! - [`run_trial`] / [`trial_pair`]: one decision process.
//! - [`simulate`] / [`simulate_seeded`]: Monte Carlo driver.
//! - [`probability_of_best`], [`probability_of_top_percentile`],
//!   [`mean_search_length`]: statistics over the result sequences.
//! - [`sweep_windows`]: the driver over a range of window sizes.
//!
//! **Features:**
//! - `parallel`: run seeded trials on rayon (same results as sequential).
//! - `serde`: derive `Serialize`/`Deserialize` on configs and results.
//!
//! **Non-goals:** plotting, histograms, persistence.
//!
//! # Example
//!
//! ```rust
//! use secretary::{simulate_seeded, SimConfig};
//!
//! let cfg = SimConfig::default()
//!     .with_population(50)
//!     .with_window(18)
//!     .with_trials(500)
//!     .with_seed(7);
//! let sim = simulate_seeded(&cfg).unwrap();
//! let summary = sim.summary();
//! assert!(summary.p_best > 0.2 && summary.p_best < 0.5);
//! ```

mod error;
pub use error::{Error, Result};

mod policy;
pub use policy::*;

mod population;
pub use population::*;

mod seed;
pub use seed::*;

mod trial;
pub use trial::*;

mod simulate;
pub use simulate::*;

mod stats;
pub use stats::*;

mod sweep;
pub use sweep::*;
