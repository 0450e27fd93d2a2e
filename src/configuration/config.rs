//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – one record per body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   grav_const: 39.478       # gravitational constant, AU^3 / (M_sun yr^2)
//!   timestep: 0.001          # step size in years
//!   num_iterations: 100000   # number of steps in the run
//!   energy_interval: 100     # optional, sample energy every N steps
//!   alignment_count: 5       # optional, innermost bodies checked for alignment
//!   alignment_tolerance: 0.0872  # optional, sin of the angular tolerance
//!
//! bodies:
//!   - name: sun
//!     mass: 1.0
//!     orbital_radius: 0.0    # ignored for the central body (index 0)
//!     colour: "yellow"
//!     integration_method: "beeman"
//!   - name: earth
//!     mass: 3.003e-6
//!     orbital_radius: 1.0
//!     colour: "blue"
//!     integration_method: "beeman"
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation (`Scenario`), validating it in the process.

use serde::Deserialize;

/// Which integration method a body uses.
/// `integration_method: "beeman"`, `"euler-cromer"` or `"direct-euler"`;
/// any other tag fails at deserialization.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "beeman")] // multistep, uses the two most recent accelerations
    Beeman,

    #[serde(rename = "euler-cromer")] // symplectic, velocity-first Euler
    EulerCromer,

    #[serde(rename = "direct-euler")] // plain explicit Euler
    DirectEuler,
}

/// Global numerical and physical parameters for a scenario.
/// The optional policy knobs default to the reference values when omitted.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub grav_const: f64,     // gravitational constant, units must match masses and timestep
    pub timestep: f64,       // step size
    pub num_iterations: usize, // number of steps in the run
    pub energy_interval: Option<usize>, // energy sampling cadence, default 100
    pub alignment_count: Option<usize>, // innermost bodies checked for alignment, default 5
    pub alignment_tolerance: Option<f64>, // perpendicular-distance bound, default sin(pi/36)
}

/// Configuration record for a single body.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // unique body name
    pub mass: f64,    // mass, must be positive
    pub orbital_radius: f64, // seeds the initial circular orbit; unused for body 0
    pub colour: String, // opaque display attribute for external renderers, ignored by the core
    pub integration_method: IntegratorConfig, // per-body integration variant
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // ordered body list, index 0 is the gravitational center
}
