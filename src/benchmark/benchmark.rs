use std::time::Instant;

use crate::simulation::correlation::correlation_function;
use crate::simulation::density;
use crate::simulation::engine::Simulation;
use crate::simulation::mesh::Mesh;
use crate::simulation::params::Parameters;
use crate::simulation::states::ParticleGroup;

/// Time the NGP deposition pass across mesh sizes.
pub fn bench_deposit() {
    let ns = [16, 32, 64, 101];

    for n in ns {
        let num_particles = n * n * n * 13;
        let group = ParticleGroup::new(1.0, num_particles, 42);
        let mut mesh = Mesh::new(n);

        // Warm up
        density::deposit(&group, &mut mesh, 100.0);

        let t0 = Instant::now();
        density::deposit(&group, &mut mesh, 100.0);
        let dt = t0.elapsed().as_secs_f64();

        println!("n = {n:4}, particles = {num_particles:9}, deposit = {dt:8.6} s");
    }
}

/// Time one full solver step (deposit, FFTs, Poisson, gradient,
/// integrate, expand) across mesh sizes.
pub fn bench_step() {
    let ns = [16, 32, 64];

    for n in ns {
        let num_particles = n * n * n * 13;
        let parameters = Parameters {
            time_max: 0.01,
            time_step: 0.01,
            box_width: 100.0,
            num_cells: n,
            expansion_factor: 1.02,
        };
        let group = ParticleGroup::new(1.0, num_particles, 42);
        let mut sim = Simulation::new(parameters, group).expect("valid benchmark parameters");

        let t0 = Instant::now();
        sim.run(None).expect("benchmark step");
        let dt = t0.elapsed().as_secs_f64();

        println!("n = {n:4}, particles = {num_particles:9}, step = {dt:8.6} s");
    }
}

/// Time the O(N²) correlation estimator across particle counts.
pub fn bench_correlation() {
    let sizes = [1_000, 2_000, 4_000, 8_000];

    for num_particles in sizes {
        let group = ParticleGroup::new(1.0, num_particles, 42);

        // Warm up
        correlation_function(&group, 101);

        let t0 = Instant::now();
        correlation_function(&group, 101);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {num_particles:7}, correlation = {dt:8.6} s");
    }
}
