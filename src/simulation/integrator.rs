//! Fixed-step time integrator for the N-body system
//!
//! Explicit Euler with an implicit unit timestep (one tick), driven by an
//! `AccelSet`. Accelerations are always taken from a snapshot of the pre-step
//! positions so the result does not depend on body order.

use super::forces::AccelSet;
use super::states::{Body, NVec2};

/// Advance `bodies` by one tick.
///
/// All accelerations are computed first into a scratch buffer, then applied:
/// `v -= a`, `x += v`. With `pin_stars` set, stars keep zero velocity and stay
/// put while still pulling on everything else.
pub fn euler_integrator(bodies: &mut [Body], forces: &AccelSet, pin_stars: bool) {
    let n = bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // a[i] is the acceleration of body i from the positions at the start of the tick
    let mut a = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*bodies, &mut a);

    for (b, a) in bodies.iter_mut().zip(a.iter()) {
        if pin_stars && b.is_star() {
            b.v = NVec2::zeros();
            continue;
        }
        // Subtract: acceleration_contribution points away from the attractor
        b.v -= *a;
        b.x += b.v;
    }
}
