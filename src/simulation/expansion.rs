//! Box expansion at the end of each time step.
//!
//! The physical box width grows by the expansion factor while unit-box
//! positions stay put; velocities are divided by the same factor to
//! preserve comoving momentum. A factor below 1 contracts the box (the
//! parameter validation warns about it once).

use rayon::prelude::*;

use crate::simulation::states::ParticleGroup;

/// Apply one expansion step: `W ← W·a`, `v ← v/a` for every particle.
pub fn expand_box(group: &mut ParticleGroup, box_width: &mut f64, factor: f64) {
    *box_width *= factor;
    group
        .particles
        .par_iter_mut()
        .for_each(|p| p.velocity /= factor);
}
