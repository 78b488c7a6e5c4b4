pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use error::{Result, SimError};

pub use simulation::states::{Body, BodyId, BodyKind, BodySize, BodyView, NVec2, State};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{acceleration_contribution, Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::collisions::{find_merge_pairs, merge, touching};
pub use simulation::universe::{MergeEvent, StepReport, Universe};
pub use simulation::scenario::{populate_random, Scenario};

pub use configuration::config::{BodyConfig, EngineConfig, KindConfig, ParametersConfig, RandomConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_advance, bench_advance_curve};
