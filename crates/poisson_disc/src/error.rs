//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Sampling itself never fails; every variant is raised while building a sampler.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument '{name}': expected a positive finite value, got {value}")]
    InvalidArgument { name: &'static str, value: f32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Checks that `value` is finite and strictly positive.
    pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<f32> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Error::InvalidArgument { name, value })
        }
    }
}
