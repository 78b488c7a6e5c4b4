use planetsim::{Scenario, ScenarioConfig, Universe};
use planetsim::{bench_advance, bench_advance_curve};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless 2D gravity simulation with planet merging")]
struct Args {
    /// Scenario file, looked up under scenarios/
    #[arg(short, default_value = "two_planets.yaml")]
    file_name: String,

    /// Override the scenario's step count
    #[arg(long)]
    steps: Option<u64>,

    /// Run the advance() benchmark instead of a scenario
    #[arg(long)]
    bench: bool,

    /// With --bench, print a CSV curve of ms per step against N
    #[arg(long, requires = "bench")]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    log::debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn report(universe: &Universe) {
    log::info!(
        "step {:5}: {} bodies, total mass {:.4}, momentum ({:.4}, {:.4})",
        universe.steps(),
        universe.len(),
        universe.total_mass(),
        universe.total_momentum().x,
        universe.total_momentum().y
    );
    for view in universe.bodies() {
        log::info!(
            "  {} {:6} at ({:9.2}, {:9.2}) r = {:.3}",
            view.id, view.kind.to_string(), view.position.x, view.position.y, view.radius
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_advance_curve()?;
        } else {
            bench_advance()?;
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario { mut engine, mut universe } = Scenario::build_scenario(scenario_cfg)?;

    if let Some(steps) = args.steps {
        engine.steps = steps;
    }

    report(&universe);
    for _ in 0..engine.steps {
        let step = universe.advance();
        for merge in &step.merges {
            log::info!(
                "step {}: {} + {} merged into {} (m = {:.4})",
                step.step, merge.consumed.0, merge.consumed.1, merge.result, merge.mass
            );
        }
        if engine.should_report(step.step) {
            report(&universe);
        }
    }

    log::info!("done after {} steps, {} bodies left", universe.steps(), universe.len());

    Ok(())
}
