//! Error types for orbit-leapfrog.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The orbital radius reached exactly zero, where the potential is singular.
    #[error("division by zero: radius vanished at the potential centre")]
    DivideByZero,

    #[error("orbit is unbound (specific energy {energy:.6e} >= 0)")]
    Unbound { energy: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, OrbitError>;
