//! Monte Carlo estimation of Pi.
//!
//! Points are sampled uniformly from the square `[-1, 1] x [-1, 1]`.  The
//! fraction landing inside the inscribed unit circle approaches `pi / 4`, so
//! four times that fraction estimates Pi.

pub mod error;
pub mod estimate;
pub mod utils;

pub use error::{Error, Result};
pub use estimate::{count_inside, estimate_pi, estimate_pi_with, is_inside, Estimate};
pub use utils::{rng_from_seed, MyRng};
