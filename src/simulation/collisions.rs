//! Collision detection and merging
//!
//! Two planets touch when their circles overlap (boundary inclusive). Touching
//! planets are replaced by one planet that keeps the total mass and momentum.
//! Stars never merge.

use crate::simulation::params::Parameters;
use crate::simulation::states::{radius_from_mass, Body, BodyId, BodyKind};

/// `|a.x - b.x| <= a.radius + b.radius`
pub fn touching(a: &Body, b: &Body) -> bool {
    (a.x - b.x).norm() <= a.radius + b.radius
}

/// Combine `x` and `y` into a new planet with id `id`.
///
/// - mass: `m_x + m_y`
/// - velocity: momentum-weighted average `(m_x v_x + m_y v_y) / m`
/// - radius: from the new mass at planet density
/// - position: that of `x`
pub fn merge(x: &Body, y: &Body, id: BodyId, params: &Parameters) -> Body {
    let m = x.m + y.m;
    let v = (x.momentum() + y.momentum()) / m;

    Body {
        id,
        kind: BodyKind::Planet,
        x: x.x,
        v,
        m,
        radius: radius_from_mass(m, params.planet_density),
    }
}

/// Pick the pairs to merge this step, as indices into `bodies`.
///
/// Pairs are scanned in ascending index order (`i < j`, outer loop over `i`)
/// and a body already claimed by an earlier pair is skipped, so each body is
/// merged at most once per step and the choice is deterministic.
pub fn find_merge_pairs(bodies: &[Body]) -> Vec<(usize, usize)> {
    let n = bodies.len();
    let mut consumed = vec![false; n];
    let mut pairs = Vec::new();

    for i in 0..n {
        if consumed[i] || bodies[i].is_star() {
            continue;
        }
        for j in (i + 1)..n {
            if consumed[j] || bodies[j].is_star() {
                continue;
            }
            if touching(&bodies[i], &bodies[j]) {
                consumed[i] = true;
                consumed[j] = true;
                pairs.push((i, j));
                break; // i is gone, move on
            }
        }
    }

    pairs
}
