//! Build fully-initialized validation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the validation suite:
//! - physical parameters (`Parameters`)
//! - orbit settings with the model selector parsed into [`GravityModel`]
//! - expanded radius grids for the rotation-curve and sensitivity sweeps
//!
//! Model-name validation happens here: an unrecognized selector string
//! fails with `InvalidModel` instead of falling back to a default

use crate::configuration::config::ScenarioConfig;
use crate::error::SimResult;
use crate::simulation::forces::GravityModel;
use crate::simulation::params::Parameters;
use crate::simulation::rotation::linspace;

/// Runtime orbit settings with the selector already validated
#[derive(Debug, Clone)]
pub struct OrbitSettings {
    pub model: GravityModel,
    pub initial_radius: f64,
    pub steps: usize,
    pub dt: f64,
}

/// Fully-initialized runtime bundle for one validation run
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub orbit: OrbitSettings,
    pub curve_radii: Vec<f64>,
    pub sensitivity_factors: Vec<f64>,
    pub sensitivity_radii: Vec<f64>,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            central_mass: p_cfg.central_mass,
            a0: p_cfg.a0,
        };

        // Orbit settings: selector string -> closed enum, or InvalidModel
        let o_cfg = &cfg.orbit;
        let orbit = OrbitSettings {
            model: GravityModel::parse(&o_cfg.model)?,
            initial_radius: o_cfg.initial_radius,
            steps: o_cfg.steps,
            dt: o_cfg.dt,
        };

        // Radius grids from the linspace-style configs
        let c_cfg = &cfg.rotation_curve;
        let curve_radii = linspace(c_cfg.r_min, c_cfg.r_max, c_cfg.samples);

        let s_cfg = &cfg.sensitivity;
        let sensitivity_radii = linspace(s_cfg.r_min, s_cfg.r_max, s_cfg.samples);

        Ok(Self {
            parameters,
            orbit,
            curve_radii,
            sensitivity_factors: s_cfg.factors.clone(),
            sensitivity_radii,
        })
    }
}
