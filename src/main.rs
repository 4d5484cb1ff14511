use egsim::{
    bench_forces, bench_orbit, compare_orbits, run_convergence, run_lensing,
    run_rotation_validation, run_sensitivity, LensingSetup, Scenario, ScenarioConfig,
};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "galaxy.yaml")]
    file_name: String,

    /// Run the force/integrator micro-benchmarks instead of the validations
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn verdict(name: &str, passed: bool) -> bool {
    println!("[{}] {}", if passed { "PASS" } else { "FAIL" }, name);
    passed
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_orbit();
        return Ok(());
    }

    let cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(&cfg)?;

    println!("{}", "=".repeat(60));
    println!("ENTROPIC GRAVITY VALIDATION SUITE");
    println!("{}", "=".repeat(60));

    let mut all_passed = true;

    // Rotation curves: Newton falls, entropic stays flat
    let rotation = run_rotation_validation(&scenario.curve_radii, &scenario.parameters);
    println!(
        "Newton variation: {:.1}% | entropic variation: {:.1}%",
        rotation.variation_newtonian * 100.0,
        rotation.variation_entropic * 100.0
    );
    all_passed &= verdict("Galactic Rotation Curves", rotation.passed);

    // Orbit comparison at the configured release radius
    let orbit = &scenario.orbit;
    let comparison = compare_orbits(orbit.initial_radius, orbit.steps, orbit.dt, &scenario.parameters)?;
    println!(
        "Newton final r: {:.1} | entropic final r: {:.1} (released at {:.1})",
        comparison.final_radius_newtonian,
        comparison.final_radius_entropic,
        comparison.initial_radius
    );
    all_passed &= verdict("Orbit Stability", comparison.stable);

    // Sensitivity: a0 varied, flatness must survive every trial
    let sensitivity = run_sensitivity(
        &scenario.sensitivity_factors,
        &scenario.sensitivity_radii,
        &scenario.parameters,
    );
    for row in &sensitivity.rows {
        println!(
            "a0 x{:.1} -> outer variation {:.2}% ({})",
            row.factor,
            row.outer_variation * 100.0,
            if row.stable { "Stable" } else { "Unstable" }
        );
    }
    all_passed &= verdict("Parameter Sensitivity Audit", sensitivity.robust);

    // Convergence: Euler should show first-order behavior
    // A tenth of the orbit horizon keeps the three halved runs cheap
    let horizon = orbit.steps as f64 * orbit.dt / 10.0;
    let convergence = run_convergence(
        orbit.model,
        orbit.initial_radius,
        horizon,
        orbit.dt,
        &scenario.parameters,
    )?;
    println!("observed order: {:.2}", convergence.observed_order);
    all_passed &= verdict("Numerical Convergence (Richardson)", convergence.passed);

    // Lensing: deflection plateau instead of Keplerian decay
    let lensing = run_lensing(&LensingSetup::from_config(&cfg.lensing));
    println!(
        "inner entropic/GR: {:.2} | outer entropic/GR: {:.2}",
        lensing.inner_ratio, lensing.outer_ratio
    );
    all_passed &= verdict("Gravitational Lensing", lensing.passed);

    println!("{}", "=".repeat(60));
    if !all_passed {
        anyhow::bail!("one or more validations failed");
    }
    println!("All validations passed");

    Ok(())
}
