//! Core state types for the N-body simulation.
//!
//! Defines the 2D vector state and the body model:
//! - `State` - position/velocity pair used to place a body
//! - `Body` - a live planet or star owned by a `Universe`
//! - `BodyView` - read-only snapshot handed out for drawing
//!
//! Mass and radius are tied together by the density of the body's kind,
//! see [`mass_from_radius`] and [`radius_from_mass`].

use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

use crate::error::{Result, SimError};
use crate::simulation::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// Position and velocity of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl State {
    pub fn new(x: NVec2, v: NVec2) -> Self {
        Self { x, v }
    }

    /// Body at rest at `x`
    pub fn at_rest(x: NVec2) -> Self {
        Self { x, v: NVec2::zeros() }
    }

    fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

/// Body variants. Only the density used to derive mass differs between them,
/// and stars are skipped by collision merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Planet,
    Star,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyKind::Planet => write!(f, "planet"),
            BodyKind::Star => write!(f, "star"),
        }
    }
}

/// Stable handle for a body inside one universe. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a new body is sized
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodySize {
    /// Mass is derived from the radius and the kind's density
    Radius(f64),
    /// Radius is derived from the mass using planet density
    Mass(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // radius (collision circle)
}

impl Body {
    /// Build a body, validating the size and state at the boundary so the
    /// step loop never sees a non-positive radius or mass.
    pub fn new(id: BodyId, kind: BodyKind, state: State, size: BodySize, params: &Parameters) -> Result<Self> {
        if !state.is_finite() {
            return Err(SimError::NonFiniteState { x: state.x, v: state.v });
        }

        let (m, radius) = match size {
            BodySize::Radius(r) => {
                if !(r.is_finite() && r > 0.0) {
                    return Err(SimError::InvalidRadius(r));
                }
                (mass_from_radius(r, params.density(kind)), r)
            }
            BodySize::Mass(m) => {
                if !(m.is_finite() && m > 0.0) {
                    return Err(SimError::InvalidMass(m));
                }
                (m, radius_from_mass(m, params.planet_density))
            }
        };

        // The derived side can still overflow to inf or underflow to zero
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass(m));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }

        Ok(Self { id, kind, x: state.x, v: state.v, m, radius })
    }

    pub fn state(&self) -> State {
        State::new(self.x, self.v)
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    pub fn view(&self) -> BodyView {
        BodyView {
            id: self.id,
            position: self.x,
            radius: self.radius,
            kind: self.kind,
        }
    }
}

/// What a renderer needs to draw one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub id: BodyId,
    pub position: NVec2,
    pub radius: f64,
    pub kind: BodyKind,
}

/// m = density * 4/3 * pi * r^3
pub fn mass_from_radius(radius: f64, density: f64) -> f64 {
    density * 4.0 / 3.0 * PI * radius.powi(3)
}

/// Inverse of [`mass_from_radius`]: r = (3/(4 pi) * m / density)^(1/3)
pub fn radius_from_mass(mass: f64, density: f64) -> f64 {
    (3.0 / (4.0 * PI) * mass / density).cbrt()
}
