pub mod error;
pub mod rng;
pub mod sweep;
pub mod trial;

pub use error::SimError;
pub use rng::Rng;
pub use sweep::{
    default_fractions, optimal_point, run_sweep, run_sweep_parallel, run_sweep_with_progress,
    skip_count_for, SweepConfig, SweepPoint, THEORETICAL_OPTIMUM_FRACTION,
};
pub use trial::{choose_from_arrivals, run_trial};
