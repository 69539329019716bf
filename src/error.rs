use thiserror::Error;

/// Errors raised while setting up an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sample count must be strictly positive.
    #[error("number of points must be positive, got {0}")]
    InvalidNumPoints(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
