// src/error.rs
use thiserror::Error;

/// Error types for the vanilla-mc library
///
/// Pricing functions on scalars never fail; degenerate inputs fall back to
/// defined numeric values. Errors are only raised at the engine and
/// vectorized-pricing boundaries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SdeError {
    /// Invalid argument passed to a pricing or simulation entry point
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument { parameter: String, reason: String },

    /// Invalid engine configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Path data requested before any simulation completed
    #[error("No simulation has been run yet: call run_simulation first")]
    SimulationNotRun,

    /// Failure while exporting results
    #[error("I/O error: {reason}")]
    Io { reason: String },
}

impl From<std::io::Error> for SdeError {
    fn from(err: std::io::Error) -> Self {
        SdeError::Io {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for vanilla-mc operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Upper bound on the number of simulated paths
    pub const MAX_PATHS: usize = 100_000_000;

    fn invalid(name: &str, reason: String) -> SdeError {
        SdeError::InvalidArgument {
            parameter: name.to_string(),
            reason,
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(invalid(
                name,
                format!("must be finite (not NaN or infinite), got {}", value),
            ))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SdeResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(invalid(name, format!("must be non-negative (≥ 0), got {}", value)))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(invalid(name, format!("must be positive (> 0), got {}", value)))
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> SdeResult<()> {
        if paths == 0 {
            Err(invalid("nb_paths", "must be greater than 0".to_string()))
        } else if paths > MAX_PATHS {
            Err(invalid(
                "nb_paths",
                format!("exceeds maximum allowed ({})", MAX_PATHS),
            ))
        } else {
            Ok(())
        }
    }

    /// Upper bound on the number of dates in one simulation grid
    pub const MAX_STEPS: usize = 1_000_000;

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> SdeResult<()> {
        if steps == 0 {
            Err(invalid("nb_steps", "must be greater than 0".to_string()))
        } else if steps > MAX_STEPS {
            Err(invalid(
                "nb_steps",
                format!("exceeds maximum allowed ({})", MAX_STEPS),
            ))
        } else {
            Ok(())
        }
    }

    /// Upper bound on `nb_paths × nb_steps` for one simulation
    ///
    /// The engine holds two matrices of this size (paths and increments).
    pub const MAX_GRID_POINTS: usize = 100_000_000;

    /// Validate the total size of a `(nb_paths, nb_steps)` simulation
    pub fn validate_grid_size(paths: usize, steps: usize) -> SdeResult<()> {
        match paths.checked_mul(steps) {
            Some(cells) if cells <= MAX_GRID_POINTS => Ok(()),
            _ => Err(invalid(
                "nb_paths",
                format!(
                    "{} paths x {} dates exceeds maximum grid size ({})",
                    paths, steps, MAX_GRID_POINTS
                ),
            )),
        }
    }

    /// Validate that `actual` elements were supplied where `expected` were required
    pub fn validate_same_len(name: &str, expected: usize, actual: usize) -> SdeResult<()> {
        if expected != actual {
            Err(invalid(
                name,
                format!("expected {} elements, got {}", expected, actual),
            ))
        } else {
            Ok(())
        }
    }
}
