//! Monte Carlo simulation of the secretary optimal-stopping problem.
//!
//! Estimates the success probability of the classic reject-then-commit
//! strategy across a sweep of rejection fractions and compares the
//! empirical optimum against the theoretical 1/e constant.
//!
//! ```
//! use secretary::sim::{run_sweep, optimal_point, SweepConfig};
//!
//! let config = SweepConfig {
//!     n: 50,
//!     iterations: 500,
//!     fractions: vec![0.0, 0.25, 0.5],
//!     seed: 42,
//! };
//! let points = run_sweep(&config).unwrap();
//! let optimum = optimal_point(&points).unwrap();
//! assert!(points.iter().any(|p| p.fraction == optimum.fraction));
//! ```

pub mod cli;
pub mod parallel;
pub mod report;
pub mod sim;

pub use sim::{SimError, SweepConfig, SweepPoint};
