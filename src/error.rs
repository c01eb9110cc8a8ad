// src/error.rs
use std::fmt;

/// Custom error types for the ito-mc library
///
/// The only failure category is caller-contract violation: invalid numeric
/// ranges are rejected when parameters are constructed. Simulation itself
/// is total over validated inputs and never returns an error.
#[derive(Debug, Clone)]
pub enum SimError {
    /// Invalid numeric parameter value
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid path or step count
    InvalidCount { field: String, reason: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SimError::InvalidCount { field, reason } => {
                write!(f, "Invalid count for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Result type alias for ito-mc operations
pub type SimResult<T> = Result<T, SimError>;

/// Validation utilities
pub mod validation {
    use super::{SimError, SimResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SimResult<()> {
        if value <= 0.0 {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SimResult<()> {
        if value < 0.0 {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SimResult<()> {
        if !value.is_finite() {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate path count
    pub fn validate_path_count(paths: usize) -> SimResult<()> {
        if paths == 0 {
            Err(SimError::InvalidCount {
                field: "path_count".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if paths > 1_000_000_000 {
            Err(SimError::InvalidCount {
                field: "path_count".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate total step count over the horizon
    pub fn validate_step_count(steps: usize) -> SimResult<()> {
        if steps == 0 {
            Err(SimError::InvalidCount {
                field: "total_steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > 100_000 {
            Err(SimError::InvalidCount {
                field: "total_steps".to_string(),
                reason: "exceeds maximum allowed (100,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
