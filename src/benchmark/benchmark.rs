use std::time::Instant;

use crate::error::Result;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyKind, BodySize, NVec2, State};
use crate::simulation::universe::Universe;

/// Helper to build a universe of `n` small planets spread over a wide field
fn make_universe(n: usize) -> Result<Universe> {
    let mut universe = Universe::new(Parameters::default())?;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (i_f * 0.37).sin() * 5000.0,
            (i_f * 0.13).cos() * 5000.0,
        );
        universe.add_body(BodyKind::Planet, State::at_rest(x), BodySize::Radius(1.0))?;
    }

    Ok(universe)
}

/// Time the force pass on its own and a full `advance()` for growing n
pub fn bench_advance() -> Result<()> {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 3; // advance() calls per size

    for n in ns {
        let mut universe = make_universe(n)?;
        let params = universe.parameters().clone();

        let forces = AccelSet::new().with(NewtonianGravity {
            g: params.g,
            min_distance: params.min_distance,
        });
        let bodies: Vec<_> = universe.iter().cloned().collect();
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        forces.accumulate_accels(&bodies, &mut out);

        let t0 = Instant::now();
        forces.accumulate_accels(&bodies, &mut out);
        let dt_forces = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        for _ in 0..steps {
            universe.advance();
        }
        let dt_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, forces = {dt_forces:8.6} s, advance = {dt_step:8.6} s, live = {}", universe.len());
    }

    Ok(())
}

/// CSV of ms per `advance()` against n, for plotting the O(n^2) curve
pub fn bench_advance_curve() -> Result<()> {
    println!("N,advance_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };
        let mut universe = make_universe(n)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            universe.advance();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }

    Ok(())
}
