//! The universe: sole owner of the live bodies and the per-tick step.
//!
//! One call to [`Universe::advance`] runs, in order:
//! 1. accelerations for every body from a snapshot of pre-step positions
//! 2. explicit Euler integration (`v -= a`, `x += v`)
//! 3. collision detection over planet pairs
//! 4. merging, applied in one pass after all pairs are chosen
//!
//! Membership only changes in step 4: consumed bodies are dropped and the
//! merged planets are appended in merge order.

use crate::error::Result;
use crate::simulation::collisions::{find_merge_pairs, merge};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, BodyKind, BodySize, BodyView, NVec2, State};

/// Record of one merge performed during a step
#[derive(Debug, Clone, PartialEq)]
pub struct MergeEvent {
    pub consumed: (BodyId, BodyId),
    pub result: BodyId,
    pub mass: f64,
}

/// Summary returned by [`Universe::advance`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub step: u64,
    pub merges: Vec<MergeEvent>,
    pub live: usize,
}

pub struct Universe {
    parameters: Parameters,
    forces: AccelSet,
    bodies: Vec<Body>, // insertion order
    next_id: u64,
    steps: u64,
}

impl Universe {
    pub fn new(parameters: Parameters) -> Result<Self> {
        parameters.validate()?;

        // Forces: register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            min_distance: parameters.min_distance,
        });

        Ok(Self {
            parameters,
            forces,
            bodies: Vec::new(),
            next_id: 0,
            steps: 0,
        })
    }

    /// Add a body; fails on a non-positive/non-finite size or a non-finite state
    pub fn add_body(&mut self, kind: BodyKind, state: State, size: BodySize) -> Result<BodyId> {
        let id = BodyId(self.next_id);
        let body = Body::new(id, kind, state, size, &self.parameters)?;
        self.next_id += 1;

        log::debug!("added {kind} {id} at ({:.2}, {:.2}), r = {:.3}, m = {:.4}", body.x.x, body.x.y, body.radius, body.m);
        self.bodies.push(body);
        Ok(id)
    }

    /// One discrete physics step. Never fails: degenerate distances are clamped
    /// by the force law and an empty universe just counts the tick.
    pub fn advance(&mut self) -> StepReport {
        self.steps += 1;

        euler_integrator(&mut self.bodies, &self.forces, self.parameters.pin_stars);

        let pairs = find_merge_pairs(&self.bodies);
        let mut merges = Vec::with_capacity(pairs.len());

        if !pairs.is_empty() {
            let mut consumed = vec![false; self.bodies.len()];
            let mut merged = Vec::with_capacity(pairs.len());

            for (i, j) in pairs {
                let id = self.fresh_id();
                let (x, y) = (&self.bodies[i], &self.bodies[j]);
                let body = merge(x, y, id, &self.parameters);

                log::debug!(
                    "step {}: merged {} + {} -> {} (m = {:.4}, r = {:.3})",
                    self.steps, x.id, y.id, id, body.m, body.radius
                );
                merges.push(MergeEvent { consumed: (x.id, y.id), result: id, mass: body.m });

                consumed[i] = true;
                consumed[j] = true;
                merged.push(body);
            }

            // Two-phase removal: drop consumed, then append the merged planets
            let mut index = 0;
            self.bodies.retain(|_| {
                let keep = !consumed[index];
                index += 1;
                keep
            });
            self.bodies.extend(merged);
        }

        log::trace!("step {}: {} bodies, {} merges", self.steps, self.bodies.len(), merges.len());

        StepReport {
            step: self.steps,
            merges,
            live: self.bodies.len(),
        }
    }

    /// Snapshot for drawing, in collection order
    pub fn bodies(&self) -> Vec<BodyView> {
        self.bodies.iter().map(Body::view).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of `advance()` calls so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |p, b| p + b.momentum())
    }

    fn fresh_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl std::fmt::Debug for Universe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Universe")
            .field("parameters", &self.parameters)
            .field("bodies", &self.bodies)
            .field("steps", &self.steps)
            .finish()
    }
}

