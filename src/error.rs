//! Error types for the simulation kernel.
//!
//! All failures are detected synchronously and surface immediately to the
//! caller; nothing is retried or silently corrected. Radii at or below the
//! numerical floor are not errors: both force laws return zero there by
//! convention.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Model selector is neither `newtonian` nor `entropic`.
    #[error("unknown gravity model `{0}`, expected `newtonian` or `entropic`")]
    InvalidModel(String),

    /// A numeric parameter handed to the integrator is out of range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type SimResult<T> = Result<T, SimulationError>;
