//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - a populated `Universe` (explicit bodies first, then random planets)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, RandomConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyKind, BodySize, NVec2, State};
use crate::simulation::universe::Universe;

/// Runtime bundle: what to run and for how long
#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub universe: Universe,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Engine (runtime) from EngineConfig
        let engine = Engine {
            steps: cfg.engine.steps,
            report_every: cfg.engine.report_every,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            planet_density: p_cfg.planet_density,
            star_density: p_cfg.star_density,
            min_distance: p_cfg.min_distance,
            pin_stars: p_cfg.pin_stars,
        };

        let mut universe = Universe::new(parameters)?;

        // Bodies: map `BodyConfig` -> runtime body using nalgebra vectors
        for (index, bc) in cfg.bodies.iter().enumerate() {
            let (kind, state, size) = body_from_config(index, bc)?;
            universe.add_body(kind, state, size)?;
        }

        if let Some(random) = &cfg.random {
            populate_random(&mut universe, random)?;
        }

        log::info!("scenario built: {} bodies, {} steps", universe.len(), engine.steps);

        Ok(Self { engine, universe })
    }
}

fn body_from_config(index: usize, bc: &BodyConfig) -> Result<(BodyKind, State, BodySize)> {
    let invalid = |reason: String| SimError::InvalidBody { index, reason };

    let x = vec2(&bc.x).ok_or_else(|| invalid(format!("x must have 2 components, got {}", bc.x.len())))?;
    let v = vec2(&bc.v).ok_or_else(|| invalid(format!("v must have 2 components, got {}", bc.v.len())))?;

    let size = match (bc.radius, bc.mass) {
        (Some(r), None) => BodySize::Radius(r),
        (None, Some(m)) => BodySize::Mass(m),
        (Some(_), Some(_)) => return Err(invalid("give either radius or mass, not both".into())),
        (None, None) => return Err(invalid("missing radius or mass".into())),
    };

    Ok((bc.kind.into(), State::new(x, v), size))
}

fn vec2(components: &[f64]) -> Option<NVec2> {
    match components {
        [x, y] => Some(NVec2::new(*x, *y)),
        _ => None,
    }
}

/// Scatter `cfg.count` planets at rest over the `width` x `height` field with
/// radii in `[radius_min, radius_max]`. The same seed gives the same planets.
pub fn populate_random(universe: &mut Universe, cfg: &RandomConfig) -> Result<()> {
    let field_ok = cfg.width.is_finite() && cfg.width > 0.0 && cfg.height.is_finite() && cfg.height > 0.0;
    if !field_ok {
        return Err(SimError::InvalidPopulation(format!("field must be positive, got {} x {}", cfg.width, cfg.height)));
    }
    if !(cfg.radius_min > 0.0 && cfg.radius_min <= cfg.radius_max && cfg.radius_max.is_finite()) {
        return Err(SimError::InvalidPopulation(format!(
            "need 0 < radius_min <= radius_max, got {}..={}",
            cfg.radius_min, cfg.radius_max
        )));
    }

    let mut rng = StdRng::seed_from_u64(cfg.seed);

    for _ in 0..cfg.count {
        let x = NVec2::new(rng.random_range(0.0..=cfg.width), rng.random_range(0.0..=cfg.height));
        let radius = rng.random_range(cfg.radius_min..=cfg.radius_max);
        universe.add_body(BodyKind::Planet, State::at_rest(x), BodySize::Radius(radius))?;
    }

    log::debug!("placed {} random planets (seed {})", cfg.count, cfg.seed);
    Ok(())
}
