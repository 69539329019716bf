//! The estimator itself.
//!
//! ```text
//!  A_circle     pi * r^2     pi          # inside
//! ---------- = ---------- = ----  =>  4 ----------  ~= pi
//!  A_square     (2r)^2       4           # total
//! ```

use std::f64::consts::PI;
use std::fmt;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::rng_from_seed;

/// Outcome of one estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub num_points: u64,
    pub points_inside_circle: u64,
    pub pi_estimate: f64,
    /// Seed the generator was initialised with, if any.
    pub seed: Option<u64>,
}

impl Estimate {
    fn new(num_points: u64, points_inside_circle: u64, seed: Option<u64>) -> Self {
        debug_assert!(num_points > 0 && points_inside_circle <= num_points);
        Estimate {
            num_points,
            points_inside_circle,
            pi_estimate: 4.0 * points_inside_circle as f64 / num_points as f64,
            seed,
        }
    }

    /// Estimate over an explicit list of points.  Fails if `points` is empty.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut total = 0;
        let mut inside = 0;
        for (x, y) in points {
            total += 1;
            if is_inside(x, y) {
                inside += 1;
            }
        }
        if total == 0 {
            return Err(Error::InvalidNumPoints(0));
        }
        Ok(Estimate::new(total, inside, None))
    }

    /// `|pi_estimate - pi|`
    pub fn absolute_error(&self) -> f64 {
        (self.pi_estimate - PI).abs()
    }

    /// Binomial standard error of the estimate, `4 sqrt(p (1 - p) / n)`.
    /// Shrinks as `1 / sqrt(n)`.
    pub fn standard_error(&self) -> f64 {
        let n = self.num_points as f64;
        let p = self.points_inside_circle as f64 / n;
        4.0 * (p * (1.0 - p) / n).sqrt()
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of points: {}", self.num_points)?;
        writeln!(f, "Points inside circle: {}", self.points_inside_circle)?;
        writeln!(f, "Estimated value of Pi: {:?}", self.pi_estimate)?;
        match self.seed {
            Some(seed) => write!(f, "Seed used: {}", seed),
            None => write!(f, "Seed used: None"),
        }
    }
}

/// Whether `(x, y)` lies in the closed unit disc.
#[inline]
pub fn is_inside(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

pub fn count_inside<I>(points: I) -> u64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    points.into_iter().filter(|&(x, y)| is_inside(x, y)).count() as u64
}

/// Sample `num_points` points from `rng` and estimate Pi.  Each point draws
/// its x coordinate and then its y coordinate from `[-1, 1]`.
pub fn estimate_pi_with<R: Rng + ?Sized>(rng: &mut R, num_points: u64) -> Result<Estimate> {
    if num_points == 0 {
        return Err(Error::InvalidNumPoints(0));
    }
    let between = Uniform::new_inclusive(-1.0f64, 1.0);
    let inside = count_inside((0..num_points).map(|_| {
        let x = between.sample(&mut *rng);
        let y = between.sample(&mut *rng);
        (x, y)
    }));
    Ok(Estimate::new(num_points, inside, None))
}

/// Estimate Pi from `num_points` samples.  With a seed the result is
/// reproducible; without one it varies between runs.
pub fn estimate_pi(num_points: u64, seed: Option<u64>) -> Result<Estimate> {
    if num_points == 0 {
        return Err(Error::InvalidNumPoints(0));
    }
    debug!(num_points, ?seed, "sampling");
    let mut rng = rng_from_seed(seed);
    let estimate = Estimate {
        seed,
        ..estimate_pi_with(&mut rng, num_points)?
    };
    debug!(
        inside = estimate.points_inside_circle,
        pi = estimate.pi_estimate,
        abs_error = estimate.absolute_error(),
        std_error = estimate.standard_error(),
        "done"
    );
    Ok(estimate)
}
