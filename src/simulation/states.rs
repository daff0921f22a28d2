//! Core state types for the particle-mesh simulation.
//!
//! Defines the particle store:
//! - `Particle` using `NVec3` (unit-box position, velocity)
//! - `ParticleGroup` holding the ordered particle list and the shared mass
//!
//! Positions live in unit-box coordinates `[0,1)³`; the physical extent of
//! the box is carried separately by the simulation's box width.

use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: NVec3, // unit-box coordinates, each component in [0,1)
    pub velocity: NVec3, // unit-box lengths per time unit
}

/// Ordered collection of particles plus the mass they all share.
///
/// The ordering is arbitrary but fixed for the lifetime of the group; the
/// integrator and the box expander mutate particles in place, nothing
/// reorders them.
#[derive(Debug, Clone)]
pub struct ParticleGroup {
    pub particles: Vec<Particle>,
    pub mass: f64, // shared by every particle
}

impl ParticleGroup {
    /// Create `num_particles` particles uniformly distributed in the unit
    /// box, with zero initial velocity.
    ///
    /// The same `seed` always produces the same positions: components are
    /// drawn x, y, z in particle order from a `StdRng`.
    pub fn new(mass: f64, num_particles: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..num_particles)
            .map(|_| Particle {
                position: NVec3::new(rng.random(), rng.random(), rng.random()),
                velocity: NVec3::zeros(),
            })
            .collect();
        Self { particles, mass }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
