//! Rotation-curve validation: flat curve without dark matter
//!
//! Evaluates both force laws over the same radius grid and compares the
//! flatness coefficient of variation of the two curves. The published
//! acceptance threshold: the entropic curve must vary less than half as
//! much as the Newtonian one

use crate::simulation::forces::GravityModel;
use crate::simulation::params::Parameters;
use crate::simulation::rotation::{rotation_curve, RotationCurve};
use crate::validation::stats::coefficient_of_variation;

/// Entropic variation must stay below this fraction of the Newtonian one
pub const FLATNESS_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct RotationReport {
    pub curve_newtonian: RotationCurve,
    pub curve_entropic: RotationCurve,
    pub variation_newtonian: f64,
    pub variation_entropic: f64,
    pub passed: bool,
}

/// Compare the two rotation curves over `radii`
pub fn run_rotation_validation(radii: &[f64], params: &Parameters) -> RotationReport {
    let curve_newtonian = rotation_curve(radii, GravityModel::Newtonian, params);
    let curve_entropic = rotation_curve(radii, GravityModel::Entropic, params);

    let variation_newtonian = coefficient_of_variation(&curve_newtonian.velocities);
    let variation_entropic = coefficient_of_variation(&curve_entropic.velocities);

    let passed = variation_entropic < variation_newtonian * FLATNESS_THRESHOLD;

    tracing::info!(
        variation_newtonian,
        variation_entropic,
        passed,
        "rotation curve comparison"
    );

    RotationReport {
        curve_newtonian,
        curve_entropic,
        variation_newtonian,
        variation_entropic,
        passed,
    }
}
