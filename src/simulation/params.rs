//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g` (scaled so motion is visible at a unit timestep),
//! - per-kind densities used to turn radius into mass,
//! - minimum distance clamp for the force law,
//! - whether stars are held in place

use crate::error::{Result, SimError};
use crate::simulation::states::BodyKind;

pub const DEFAULT_G: f64 = 1.0e2;
pub const DEFAULT_PLANET_DENSITY: f64 = 0.001;
pub const DEFAULT_STAR_DENSITY: f64 = 0.01;
pub const DEFAULT_MIN_DISTANCE: f64 = 1.0e-3;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub planet_density: f64,
    pub star_density: f64,
    pub min_distance: f64, // lower bound on pair distance in the force law
    pub pin_stars: bool, // stars pull but never move
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            planet_density: DEFAULT_PLANET_DENSITY,
            star_density: DEFAULT_STAR_DENSITY,
            min_distance: DEFAULT_MIN_DISTANCE,
            pin_stars: false,
        }
    }
}

impl Parameters {
    pub fn density(&self, kind: BodyKind) -> f64 {
        match kind {
            BodyKind::Planet => self.planet_density,
            BodyKind::Star => self.star_density,
        }
    }

    /// Reject parameters that would put NaN/Inf or zero masses into the step loop
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("G", self.g),
            ("planet_density", self.planet_density),
            ("star_density", self.star_density),
            ("min_distance", self.min_distance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameter(format!("{name} must be finite and > 0, got {value}")));
            }
        }
        Ok(())
    }
}
