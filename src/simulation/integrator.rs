//! Semi-implicit Euler (kick-drift) step for the particle group.
//!
//! Each particle samples the gradient field at the cell it currently
//! occupies, then updates velocity and position in place:
//!
//! ```text
//! v ← v − ∇φ(i,j,k) · Δt
//! p ← p + v · Δt          (componentwise wrap back into [0,1))
//! ```
//!
//! Particles are independent within the pass, so the loop parallelizes
//! with no locking.

use rayon::prelude::*;

use crate::simulation::mesh::Mesh;
use crate::simulation::states::{NVec3, ParticleGroup};

/// Advance every particle by one kick-drift step of size `dt`.
///
/// `gradient` must be the `n_cells³` field produced by
/// [`potential_gradient`](crate::simulation::gradient::potential_gradient).
pub fn kick_drift_step(group: &mut ParticleGroup, gradient: &[NVec3], n_cells: usize, dt: f64) {
    group.particles.par_iter_mut().for_each(|p| {
        let (i, j, k) = Mesh::cell_of(&p.position, n_cells);
        let grad = gradient[Mesh::index(n_cells, i, j, k)];

        // Kick: v ← v − ∇φ · dt
        p.velocity -= grad * dt;

        // Drift: p ← p + v · dt, wrapped back into the unit box
        p.position += p.velocity * dt;
        p.position.x = wrap_unit(p.position.x);
        p.position.y = wrap_unit(p.position.y);
        p.position.z = wrap_unit(p.position.z);
    });
}

/// Wrap a coordinate into `[0,1)`.
///
/// The guard catches the one case where `rem_euclid` rounds a tiny
/// negative input up to exactly `1.0`.
#[inline]
pub fn wrap_unit(x: f64) -> f64 {
    let wrapped = x.rem_euclid(1.0);
    if wrapped >= 1.0 {
        wrapped - 1.0
    } else {
        wrapped
    }
}
