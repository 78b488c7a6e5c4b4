//! Error types for planetsim.
//!
//! Everything here is a boundary error: bad input caught while building bodies,
//! parameters or scenarios. The step loop itself has no error path.

use thiserror::Error;

use crate::simulation::states::NVec2;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid radius {0}: must be finite and > 0")]
    InvalidRadius(f64),

    #[error("invalid mass {0}: must be finite and > 0")]
    InvalidMass(f64),

    #[error("non-finite initial state: x = {x:?}, v = {v:?}")]
    NonFiniteState { x: NVec2, v: NVec2 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("body #{index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    #[error("invalid random population: {0}")]
    InvalidPopulation(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
