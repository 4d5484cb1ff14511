use std::time::Instant;

use crate::simulation::forces::{
    entropic_acceleration, newtonian_acceleration, GravityModel,
};
use crate::simulation::integrator::simulate_orbit;
use crate::simulation::params::Parameters;
use crate::simulation::rotation::linspace;

/// Time raw force-law evaluations over a radius grid
/// Paste output directly into a spreadsheet to graph
pub fn bench_forces() {
    let params = Parameters::default();
    let evals = 1_000_000usize;
    let radii = linspace(1.0, 200.0, 1024);

    // Warm up
    let mut sink = 0.0;
    for &r in &radii {
        sink += newtonian_acceleration(r, &params);
        sink += entropic_acceleration(r, &params);
    }

    // Time Newtonian
    let t0 = Instant::now();
    for i in 0..evals {
        let r = radii[i % radii.len()];
        sink += newtonian_acceleration(r, &params);
    }
    let dt_newton = t0.elapsed().as_secs_f64();

    // Time entropic
    let t1 = Instant::now();
    for i in 0..evals {
        let r = radii[i % radii.len()];
        sink += entropic_acceleration(r, &params);
    }
    let dt_entropic = t1.elapsed().as_secs_f64();

    println!(
        "evals = {evals}, newtonian = {:8.6} s, entropic = {:8.6} s (sink {sink:.3e})",
        dt_newton, dt_entropic
    );
}

/// Benchmark the Euler orbit integrator for a range of step counts
pub fn bench_orbit() {
    let params = Parameters::default();
    let step_counts = [1_000usize, 10_000, 100_000, 1_000_000];

    println!("steps,newtonian_ms,entropic_ms");

    for steps in step_counts {
        // Warm up with a short run
        let _ = simulate_orbit(GravityModel::Entropic, 50.0, 100, 0.1, &params);

        let t0 = Instant::now();
        let _ = simulate_orbit(GravityModel::Newtonian, 50.0, steps, 0.1, &params);
        let ms_newton = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let _ = simulate_orbit(GravityModel::Entropic, 50.0, steps, 0.1, &params);
        let ms_entropic = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6}", steps, ms_newton, ms_entropic);
    }
}
