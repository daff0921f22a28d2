//! Nearest-grid-point mass deposition onto the density buffer.
//!
//! Every particle deposits its full mass into the single cell containing
//! it. The pass runs in two stages: an integer particle count per cell,
//! accumulated atomically so threads can share the grid, followed by a
//! parallel conversion of counts into mass densities. Integer counts make
//! the result bitwise identical under any thread count.

use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;
use rustfft::num_complex::Complex;

use crate::simulation::mesh::Mesh;
use crate::simulation::states::ParticleGroup;

/// Overwrite `mesh.density` with the NGP mass density of `group`.
///
/// Each cell receives `count · mass / (W/n)³` in its real part; imaginary
/// parts are zero everywhere.
pub fn deposit(group: &ParticleGroup, mesh: &mut Mesh, box_width: f64) {
    let n = mesh.n_cells();
    let counts: Vec<AtomicU32> = std::iter::repeat_with(|| AtomicU32::new(0))
        .take(mesh.cell_count())
        .collect();

    group.particles.par_iter().for_each(|p| {
        let (i, j, k) = Mesh::cell_of(&p.position, n);
        counts[Mesh::index(n, i, j, k)].fetch_add(1, Ordering::Relaxed);
    });

    let cell_width = box_width / n as f64;
    let cell_volume = cell_width * cell_width * cell_width;
    let mass = group.mass;

    mesh.density
        .par_iter_mut()
        .zip(counts.par_iter())
        .for_each(|(cell, count)| {
            *cell = Complex::new(count.load(Ordering::Relaxed) as f64 * mass / cell_volume, 0.0);
        });
}
