//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – how long to run and how often to report
//! - [`ParametersConfig`] – physical constants (all optional, with defaults)
//! - [`BodyConfig`]       – initial state for each explicitly placed body
//! - [`RandomConfig`]     – optional seeded random planets
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario: a sun in the middle and four random planets.
//!
//! ```yaml
//! engine:
//!   steps: 600              # number of advance() calls
//!   report_every: 60        # log bodies every N steps, 0 = never
//!
//! parameters:
//!   G: 100.0                # gravitational constant
//!   planet_density: 0.001
//!   star_density: 0.01
//!   min_distance: 1.0e-3    # force law distance clamp
//!   pin_stars: true
//!
//! bodies:
//!   - kind: star
//!     x: [ 750.0, 750.0 ]
//!     v: [ 0.0, 0.0 ]
//!     radius: 20.0
//!
//! random:
//!   count: 4
//!   width: 1500.0
//!   height: 1500.0
//!   radius_min: 6.0
//!   radius_max: 10.0
//!   seed: 42
//! ```
//!
//! `Scenario::build_scenario` maps this into a populated `Universe`.

use serde::Deserialize;

use crate::simulation::engine::{DEFAULT_REPORT_EVERY, DEFAULT_STEPS};
use crate::simulation::params::{DEFAULT_G, DEFAULT_MIN_DISTANCE, DEFAULT_PLANET_DENSITY, DEFAULT_STAR_DENSITY};
use crate::simulation::states::BodyKind;

/// Body kind as written in YAML: `kind: planet` or `kind: star`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KindConfig {
    #[default]
    Planet,
    Star,
}

impl From<KindConfig> for BodyKind {
    fn from(kind: KindConfig) -> Self {
        match kind {
            KindConfig::Planet => BodyKind::Planet,
            KindConfig::Star => BodyKind::Star,
        }
    }
}

/// Run length and reporting
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_steps")]
    pub steps: u64,
    #[serde(default = "default_report_every")]
    pub report_every: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }
}

/// Physical constants for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_planet_density")]
    pub planet_density: f64,
    #[serde(default = "default_star_density")]
    pub star_density: f64,
    #[serde(default = "default_min_distance")]
    pub min_distance: f64, // distance clamp for coincident bodies
    #[serde(default)]
    pub pin_stars: bool, // stars pull but never move
}

impl Default for ParametersConfig {
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

/// Configuration for a single body's initial state.
/// Exactly one of `radius` and `mass` must be given.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub kind: KindConfig,
    pub x: Vec<f64>, // initial position [x, y]
    #[serde(default = "zero_velocity")]
    pub v: Vec<f64>, // initial velocity [vx, vy], per tick
    pub radius: Option<f64>,
    pub mass: Option<f64>,
}

/// Seeded random planets, placed at rest inside `width` x `height`
#[derive(Deserialize, Debug, Clone)]
pub struct RandomConfig {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    #[serde(default)]
    pub seed: u64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub random: Option<RandomConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

fn default_steps() -> u64 { DEFAULT_STEPS }
fn default_report_every() -> u64 { DEFAULT_REPORT_EVERY }
fn default_g() -> f64 { DEFAULT_G }
fn default_planet_density() -> f64 { DEFAULT_PLANET_DENSITY }
fn default_star_density() -> f64 { DEFAULT_STAR_DENSITY }
fn default_min_distance() -> f64 { DEFAULT_MIN_DISTANCE }
fn zero_velocity() -> Vec<f64> { vec![0.0, 0.0] }
