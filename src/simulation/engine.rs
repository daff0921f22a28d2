//! The simulation driver: construction, validation, and the step loop.
//!
//! One `Simulation` owns its particle group, mesh, and a reusable gradient
//! field. `run` sequences the passes in a strict, non-reorderable order
//! per step:
//!
//! 1. deposit density
//! 2. forward FFT → Green's-function scale → backward FFT
//! 3. gradient + kick-drift
//! 4. box expansion
//!
//! Exactly one pass is active at a time; parallelism lives inside the
//! passes. Every 10th step the current density slice is written out if an
//! output directory was supplied — snapshotting never mutates state.

use std::path::Path;

use anyhow::Result;

use crate::output;
use crate::simulation::density;
use crate::simulation::expansion;
use crate::simulation::gradient;
use crate::simulation::integrator;
use crate::simulation::mesh::Mesh;
use crate::simulation::params::Parameters;
use crate::simulation::poisson;
use crate::simulation::states::{NVec3, ParticleGroup};

pub struct Simulation {
    parameters: Parameters,
    box_width: f64, // current physical width, rescaled each step
    particles: ParticleGroup,
    mesh: Mesh,
    gradient: Vec<NVec3>,
}

impl Simulation {
    /// Build a simulation from validated parameters and an initialized
    /// particle group. Mesh buffers and FFT plans are allocated here and
    /// live until the simulation is dropped.
    pub fn new(parameters: Parameters, particles: ParticleGroup) -> Result<Self> {
        parameters.validate()?;
        let mesh = Mesh::new(parameters.num_cells);
        let gradient = vec![NVec3::zeros(); mesh.cell_count()];
        Ok(Self {
            box_width: parameters.box_width,
            parameters,
            particles,
            mesh,
            gradient,
        })
    }

    /// Run the full time loop, from `t = 0` until `t_max`.
    ///
    /// When `output_dir` is given, every 10th step writes the current
    /// density slice there as `density_<step>.pgm`.
    pub fn run(&mut self, output_dir: Option<&Path>) -> Result<()> {
        let dt = self.parameters.time_step;
        let n = self.parameters.num_cells;
        let mut t = 0.0;
        let mut step = 0u64;

        while t < self.parameters.time_max {
            density::deposit(&self.particles, &mut self.mesh, self.box_width);

            self.mesh.forward();
            poisson::apply_greens_function(&mut self.mesh, self.box_width);
            self.mesh.backward();

            let cell_width = self.box_width / n as f64;
            gradient::potential_gradient(&self.mesh.potential, n, cell_width, &mut self.gradient);
            integrator::kick_drift_step(&mut self.particles, &self.gradient, n, dt);

            expansion::expand_box(
                &mut self.particles,
                &mut self.box_width,
                self.parameters.expansion_factor,
            );

            t += dt;
            step += 1;

            if step % 10 == 0 {
                if let Some(dir) = output_dir {
                    let path = dir.join(format!("density_{step:05}.pgm"));
                    output::write_density(&self.mesh.density, n, &path)?;
                }
            }
        }
        Ok(())
    }

    pub fn particle_collection(&self) -> &ParticleGroup {
        &self.particles
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Current physical box width (`W`), after any expansion so far.
    pub fn box_width(&self) -> f64 {
        self.box_width
    }
}
