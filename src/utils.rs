use rand::SeedableRng;

use crate::error::{Error, Result};

pub type MyRng = rand_isaac::Isaac64Rng;

/// Build the sampling generator.  A seed gives a reproducible stream; without
/// one the generator is seeded from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> MyRng {
    match seed {
        Some(seed) => MyRng::seed_from_u64(seed),
        None => MyRng::from_entropy(),
    }
}

/// Validate a sample count as given on the command line.
pub fn checked_num_points(num_points: i64) -> Result<u64> {
    if num_points <= 0 {
        return Err(Error::InvalidNumPoints(num_points));
    }
    Ok(num_points as u64)
}
