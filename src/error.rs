use std::io;
use thiserror::Error;

use crate::common::Real;

pub type SpecResult<T> = Result<T, SpecError>;

#[derive(Error, Debug)]
pub enum SpecError {
    /// A requested field is NaN or infinite
    #[error("All fields must be valid numbers: `{field}` is not finite")]
    InvalidInput { field: &'static str },

    /// Strict validation only
    #[error("`{field}` must be positive, got {value}")]
    NonPhysical { field: &'static str, value: Real },

    #[error("`{field}` was neither given nor found in the config file")]
    MissingField { field: &'static str },

    #[error("At least one acquisition sample is required")]
    NoSamples,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
