use egsim::configuration::config::ScenarioConfig;
use egsim::error::SimulationError;
use egsim::simulation::forces::{
    entropic_acceleration, newtonian_acceleration, orbital_velocity, phase_transition,
    GravityModel,
};
use egsim::simulation::integrator::simulate_orbit;
use egsim::simulation::params::Parameters;
use egsim::simulation::rotation::{linspace, rotation_curve};
use egsim::simulation::scenario::Scenario;
use egsim::validation::convergence::run_convergence;
use egsim::validation::lensing::{self, deflection_angles, LensingSetup};
use egsim::validation::orbit::compare_orbits;
use egsim::validation::rotation::run_rotation_validation;
use egsim::validation::sensitivity::run_sensitivity;
use egsim::validation::stats::{coefficient_of_variation, mean, std_dev};

use approx::assert_relative_eq;

/// Baseline galaxy used throughout: unit G, central mass 1000, a0 = 2.0
pub fn baseline_params() -> Parameters {
    Parameters {
        G: 1.0,
        central_mass: 1000.0,
        a0: 2.0,
    }
}

/// Radius where the Newtonian field equals a0 exactly: sqrt(G M / a0)
pub fn crossover_radius(p: &Parameters) -> f64 {
    (p.G * p.central_mass / p.a0).sqrt()
}

pub fn baseline_yaml() -> &'static str {
    r#"
parameters:
  G: 1.0
  central_mass: 1000.0
  a0: 2.0
orbit:
  model: "entropic"
  initial_radius: 50.0
  steps: 2000
  dt: 0.1
rotation_curve:
  r_min: 5.0
  r_max: 100.0
  samples: 20
sensitivity:
  factors: [0.7, 0.8, 1.0, 1.2, 1.3]
  r_min: 10.0
  r_max: 100.0
  samples: 50
lensing:
  galaxy_mass_msun: 1.0e11
  scale_radius_kpc: 5.0
  r_max_kpc: 25.0
  samples: 50
"#
}

// ==================================================================================
// Force law tests
// ==================================================================================

#[test]
fn newtonian_inverse_square_law() {
    let p = baseline_params();

    let g_10 = newtonian_acceleration(10.0, &p);
    let g_20 = newtonian_acceleration(20.0, &p);

    assert!(g_10 > 0.0);
    assert!(g_20 > 0.0);
    assert!(g_10 > g_20, "force must fall off with distance");

    let ratio = g_10 / g_20;
    assert_relative_eq!(ratio, 4.0, epsilon = 1e-12);
}

#[test]
fn no_singularity_at_center() {
    let p = baseline_params();

    assert_eq!(newtonian_acceleration(0.0, &p), 0.0);
    assert_eq!(entropic_acceleration(0.0, &p), 0.0);
}

#[test]
fn entropic_matches_newton_near_center() {
    let p = baseline_params();

    // r = 5: g_N = 40, far above a0 = 2, so the laws must coincide
    let g_newton = newtonian_acceleration(5.0, &p);
    let g_entropic = entropic_acceleration(5.0, &p);

    assert!(g_newton > p.a0);
    assert_relative_eq!(g_entropic, g_newton, epsilon = 1e-12);
}

#[test]
fn entropic_exceeds_newton_far_out() {
    let p = baseline_params();

    // r = 100: g_N = 0.1 < a0 = 2, the entropic branch decays slower
    let g_newton = newtonian_acceleration(100.0, &p);
    let g_entropic = entropic_acceleration(100.0, &p);

    assert!(g_newton < p.a0);
    assert!(g_entropic > g_newton, "entropic law must dominate in the far field");
}

#[test]
fn continuity_at_crossover() {
    let p = baseline_params();
    let r_star = crossover_radius(&p);

    let g_newton = newtonian_acceleration(r_star, &p);
    let g_entropic = entropic_acceleration(r_star, &p);

    assert_relative_eq!(g_newton, p.a0, epsilon = 1e-9);
    assert_relative_eq!(g_entropic, g_newton, epsilon = 1e-9);

    // The two branches agree exactly at the transition field value
    assert_relative_eq!(phase_transition(p.a0, p.a0), p.a0, epsilon = 1e-12);
    assert_relative_eq!(
        phase_transition(p.a0 * (1.0 + 1e-9), p.a0),
        phase_transition(p.a0 * (1.0 - 1e-9), p.a0),
        epsilon = 1e-6
    );
}

#[test]
fn orbital_velocity_higher_for_entropic_far_out() {
    let p = baseline_params();
    let r = 100.0;

    let v_newton = orbital_velocity(r, GravityModel::Newtonian, &p);
    let v_entropic = orbital_velocity(r, GravityModel::Entropic, &p);

    assert!(v_newton > 0.0);
    assert!(v_entropic > v_newton);
}

#[test]
fn unknown_model_name_is_rejected() {
    match GravityModel::parse("invalid_model") {
        Err(SimulationError::InvalidModel(name)) => assert_eq!(name, "invalid_model"),
        other => panic!("expected InvalidModel, got {:?}", other),
    }

    assert_eq!(GravityModel::parse("newtonian").unwrap(), GravityModel::Newtonian);
    assert_eq!("entropic".parse::<GravityModel>().unwrap(), GravityModel::Entropic);
}

// ==================================================================================
// Orbit integrator tests
// ==================================================================================

#[test]
fn trajectory_length_is_steps_plus_one() {
    let p = baseline_params();
    let run = simulate_orbit(GravityModel::Newtonian, 10.0, 100, 0.1, &p).unwrap();

    assert_eq!(run.trajectory.len(), 101);
    assert_eq!(run.speeds.len(), 101);

    // Starts at (r0, 0)
    assert_relative_eq!(run.trajectory[0].x, 10.0, epsilon = 1e-12);
    assert_relative_eq!(run.trajectory[0].y, 0.0, epsilon = 1e-12);
    assert!(run.mean_speed > 0.0);
}

#[test]
fn zero_steps_yields_only_initial_state() {
    let p = baseline_params();
    let run = simulate_orbit(GravityModel::Entropic, 10.0, 0, 0.1, &p).unwrap();

    assert_eq!(run.trajectory.len(), 1);
    assert_relative_eq!(run.mean_speed, run.speeds[0], epsilon = 1e-12);
}

#[test]
fn integrator_rejects_bad_parameters() {
    let p = baseline_params();

    match simulate_orbit(GravityModel::Newtonian, 10.0, 10, 0.0, &p) {
        Err(SimulationError::InvalidParameter { name, .. }) => assert_eq!(name, "dt"),
        other => panic!("expected InvalidParameter for dt, got {:?}", other),
    }
    assert!(simulate_orbit(GravityModel::Newtonian, 10.0, 10, -0.1, &p).is_err());
    assert!(simulate_orbit(GravityModel::Newtonian, 10.0, 10, f64::NAN, &p).is_err());

    match simulate_orbit(GravityModel::Newtonian, 0.0, 10, 0.1, &p) {
        Err(SimulationError::InvalidParameter { name, .. }) => {
            assert_eq!(name, "initial_radius")
        }
        other => panic!("expected InvalidParameter for radius, got {:?}", other),
    }
    assert!(simulate_orbit(GravityModel::Newtonian, -5.0, 10, 0.1, &p).is_err());
}

#[test]
fn entropic_orbit_stays_near_release_radius() {
    let p = baseline_params();
    let run = simulate_orbit(GravityModel::Entropic, 30.0, 500, 0.1, &p).unwrap();

    let r_final = run.final_radius();
    assert!(
        (r_final - 30.0).abs() / 30.0 < 0.5,
        "orbit drifted from 30.0 to {r_final}"
    );
}

#[test]
fn repeated_runs_are_bit_identical() {
    let p = baseline_params();

    let a = simulate_orbit(GravityModel::Entropic, 25.0, 300, 0.05, &p).unwrap();
    let b = simulate_orbit(GravityModel::Entropic, 25.0, 300, 0.05, &p).unwrap();

    assert_eq!(a, b);
}

// ==================================================================================
// Rotation curve tests
// ==================================================================================

#[test]
fn linspace_includes_endpoints() {
    let grid = linspace(5.0, 100.0, 20);

    assert_eq!(grid.len(), 20);
    assert_relative_eq!(grid[0], 5.0, epsilon = 1e-12);
    assert_relative_eq!(grid[19], 100.0, epsilon = 1e-12);
    assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    assert!(linspace(1.0, 2.0, 0).is_empty());
}

#[test]
fn curve_preserves_input_order_and_count() {
    let p = baseline_params();
    let radii = [50.0, 10.0, 10.0, 80.0];

    let curve = rotation_curve(&radii, GravityModel::Newtonian, &p);

    assert_eq!(curve.radii, radii.to_vec());
    assert_eq!(curve.velocities.len(), 4);
    // Duplicate radii get duplicate velocities
    assert_eq!(curve.velocities[1], curve.velocities[2]);
    assert_relative_eq!(
        curve.velocities[0],
        orbital_velocity(50.0, GravityModel::Newtonian, &p),
        epsilon = 1e-12
    );
}

#[test]
fn entropic_curve_is_flatter() {
    let p = baseline_params();
    let radii = linspace(5.0, 100.0, 20);

    let report = run_rotation_validation(&radii, &p);

    assert!(report.passed);
    assert!(
        report.variation_newtonian > 2.0 * report.variation_entropic,
        "newton {:.3} vs entropic {:.3}",
        report.variation_newtonian,
        report.variation_entropic
    );
}

// ==================================================================================
// Sensitivity tests
// ==================================================================================

#[test]
fn flatness_survives_a0_variation() {
    let p = baseline_params();
    let radii = linspace(10.0, 100.0, 50);

    let report = run_sensitivity(&[0.7, 1.0, 1.3], &radii, &p);

    assert!(report.robust);
    for row in &report.rows {
        assert!(
            row.outer_variation < 0.15,
            "a0 x{} variation {:.3}",
            row.factor,
            row.outer_variation
        );
    }
    // Baseline untouched: the sweep builds fresh parameters per trial
    assert_eq!(p.a0, 2.0);
}

#[test]
fn with_a0_scales_only_the_critical_scale() {
    let p = baseline_params();
    let varied = p.with_a0(1.3);

    assert_relative_eq!(varied.a0, 2.6, epsilon = 1e-12);
    assert_eq!(varied.G, p.G);
    assert_eq!(varied.central_mass, p.central_mass);
}

// ==================================================================================
// Orbit comparison and convergence tests
// ==================================================================================

#[test]
fn orbit_comparison_reports_stable_entropic_orbit() {
    let p = baseline_params();
    let cmp = compare_orbits(50.0, 2000, 0.1, &p).unwrap();

    assert!(cmp.stable, "entropic drift {:.3}", cmp.entropic_drift);
    assert!(cmp.mean_speed_newtonian > 0.0);
    assert!(cmp.mean_speed_entropic > cmp.mean_speed_newtonian);
}

#[test]
fn euler_converges_at_first_order() {
    let p = baseline_params();
    let report = run_convergence(GravityModel::Entropic, 30.0, 10.0, 0.1, &p).unwrap();

    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.rows[1].steps, 2 * report.rows[0].steps);
    assert!(
        report.observed_order > 0.4 && report.observed_order < 1.6,
        "observed order {:.2}",
        report.observed_order
    );
}

// ==================================================================================
// Lensing tests
// ==================================================================================

#[test]
fn deflection_uses_the_shared_phase_transition() {
    // Deep in the entropic regime the boost must equal g_ent / g_N exactly
    let r_m = 20.0 * lensing::KPC;
    let m_kg = 5.0e10 * lensing::M_SUN;

    let (alpha_gr, alpha_entropic) = deflection_angles(r_m, m_kg);

    let g_newton = lensing::G_SI * m_kg / (r_m * r_m);
    let expected_boost = phase_transition(g_newton, lensing::A0_SI) / g_newton;

    assert_relative_eq!(alpha_entropic / alpha_gr, expected_boost, epsilon = 1e-12);
}

#[test]
fn deflection_matches_gr_in_the_strong_field() {
    // Small radius, large enclosed mass: g_N far above the critical scale
    let r_m = 0.5 * lensing::KPC;
    let m_kg = 1.0e10 * lensing::M_SUN;

    let (alpha_gr, alpha_entropic) = deflection_angles(r_m, m_kg);

    assert_relative_eq!(alpha_entropic, alpha_gr, epsilon = 1e-12);
}

#[test]
fn lensing_profile_plateaus_in_the_outer_region() {
    let setup = LensingSetup {
        galaxy_mass_msun: 1.0e11,
        scale_radius_kpc: 5.0,
        radii_kpc: linspace(0.1, 25.0, 50),
    };

    let report = lensing::run_lensing(&setup);

    assert_eq!(report.profile.len(), 50);
    assert!(report.passed);
    assert_relative_eq!(report.inner_ratio, 1.0, epsilon = 1e-9);
    assert!(report.outer_ratio > 1.5, "outer ratio {:.2}", report.outer_ratio);
}

// ==================================================================================
// Configuration and scenario tests
// ==================================================================================

#[test]
fn scenario_builds_from_yaml() {
    let cfg: ScenarioConfig = serde_yaml::from_str(baseline_yaml()).unwrap();
    let scenario = Scenario::build_scenario(&cfg).unwrap();

    assert_eq!(scenario.orbit.model, GravityModel::Entropic);
    assert_eq!(scenario.curve_radii.len(), 20);
    assert_eq!(scenario.sensitivity_radii.len(), 50);
    assert_relative_eq!(scenario.parameters.central_mass, 1000.0, epsilon = 1e-12);
    assert_relative_eq!(scenario.curve_radii[0], 5.0, epsilon = 1e-12);
}

#[test]
fn scenario_rejects_unknown_model() {
    let yaml = baseline_yaml().replace("\"entropic\"", "\"mondian\"");
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).unwrap();

    match Scenario::build_scenario(&cfg) {
        Err(SimulationError::InvalidModel(name)) => assert_eq!(name, "mondian"),
        other => panic!("expected InvalidModel, got {:?}", other),
    }
}

// ==================================================================================
// Statistics tests
// ==================================================================================

#[test]
fn statistics_helpers() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    assert_relative_eq!(mean(&values), 5.0, epsilon = 1e-12);
    assert_relative_eq!(std_dev(&values), 2.0, epsilon = 1e-12);
    assert_relative_eq!(coefficient_of_variation(&values), 0.4, epsilon = 1e-12);

    // A constant curve is perfectly flat
    assert_eq!(coefficient_of_variation(&[3.0, 3.0, 3.0]), 0.0);
    assert_eq!(coefficient_of_variation(&[]), 0.0);
}
