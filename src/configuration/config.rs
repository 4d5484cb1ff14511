//! Configuration types for loading validation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! validation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`]  – physical constants of the galaxy under test
//! - [`OrbitConfig`]       – single-particle orbit simulation settings
//! - [`CurveConfig`]       – radius grid for the rotation-curve comparison
//! - [`SensitivityConfig`] – a0 sweep factors and radius grid
//! - [`LensingConfig`]     – galaxy profile for the deflection-angle audit
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario
//!
//! # YAML format
//! The baseline scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 1.0                # gravitational constant
//!   central_mass: 1000.0  # mass at the galactic center
//!   a0: 2.0               # critical acceleration scale
//!
//! orbit:
//!   model: "entropic"     # or "newtonian"
//!   initial_radius: 50.0
//!   steps: 2000
//!   dt: 0.1
//!
//! rotation_curve:
//!   r_min: 5.0
//!   r_max: 100.0
//!   samples: 20
//!
//! sensitivity:
//!   factors: [0.7, 0.8, 1.0, 1.2, 1.3]
//!   r_min: 10.0
//!   r_max: 100.0
//!   samples: 50
//!
//! lensing:
//!   galaxy_mass_msun: 1.0e11
//!   scale_radius_kpc: 5.0
//!   r_max_kpc: 25.0
//!   samples: 50
//! ```
//!
//! The scenario builder maps this configuration into the runtime types the
//! kernel consumes; an unrecognized `orbit.model` string fails there with
//! `InvalidModel` rather than defaulting.

use serde::Deserialize;

/// Physical constants of the galaxy under test
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,            // gravitational constant
    pub central_mass: f64, // mass at the galactic center
    pub a0: f64,           // critical acceleration scale
}

/// Single-particle orbit simulation settings
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitConfig {
    pub model: String,       // "newtonian" or "entropic", validated at build time
    pub initial_radius: f64, // release radius of the test star
    pub steps: usize,        // number of Euler steps
    pub dt: f64,             // time increment per step
}

/// Linearly spaced radius grid
#[derive(Deserialize, Debug, Clone)]
pub struct CurveConfig {
    pub r_min: f64,
    pub r_max: f64,
    pub samples: usize,
}

/// a0 sweep: one entropic curve per factor, flatness checked on each
#[derive(Deserialize, Debug, Clone)]
pub struct SensitivityConfig {
    pub factors: Vec<f64>, // multipliers applied to the baseline a0
    pub r_min: f64,
    pub r_max: f64,
    pub samples: usize,
}

/// Galaxy profile for the lensing audit (SI units downstream)
#[derive(Deserialize, Debug, Clone)]
pub struct LensingConfig {
    pub galaxy_mass_msun: f64, // total baryonic mass in solar masses
    pub scale_radius_kpc: f64, // exponential-disk scale radius
    pub r_max_kpc: f64,        // outermost impact parameter
    pub samples: usize,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub orbit: OrbitConfig,
    pub rotation_curve: CurveConfig,
    pub sensitivity: SensitivityConfig,
    pub lensing: LensingConfig,
}
