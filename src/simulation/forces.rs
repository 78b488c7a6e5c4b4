//! Force / acceleration contributors for the n-body engine
//!
//! Defines the pairwise gravity law, the `Acceleration` trait and the
//! direct (exhaustive pairwise) Newtonian gravity term built on it

use crate::simulation::states::{Body, NVec2};

/// Contribution of `other` to the velocity change of `subject` for one tick.
///
/// `force = g * m_s * m_o / d^2`, split along `subject.x - other.x`. The
/// integrator subtracts this from the velocity, so the result pulls `subject`
/// toward `other`. The distance is clamped to `min_distance` so coincident
/// bodies give a finite (zero) contribution instead of NaN.
pub fn acceleration_contribution(subject: &Body, other: &Body, g: f64, min_distance: f64) -> NVec2 {
    // delta points from other to subject
    let delta = subject.x - other.x;
    let distance = delta.norm().max(min_distance);

    let force = g * subject.m * other.m / (distance * distance);

    delta * (force / distance)
}

/// Collection of acceleration terms (only gravity for now)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

/// Acceleration sources operating on a read-only slice of bodies
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]);
}

/// Direct Newtonian gravity, O(n^2) over every ordered pair.
/// Planets and stars are both sources and sinks.
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // distance clamp
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]) {
        let n = bodies.len();
        if n < 2 { // nothing to pair up
            return;
        }

        // Every ordered pair (i, j) with i != j
        for (i, bi) in bodies.iter().enumerate() {
            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                out[i] += acceleration_contribution(bi, bj, self.g, self.min_distance);
            }
        }
    }
}
