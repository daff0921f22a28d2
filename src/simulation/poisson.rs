//! Green's-function scaling of the k-space field.
//!
//! After the forward DFT of the density, every non-zero mode is multiplied
//! by the factor that turns a density coefficient into a potential
//! coefficient,
//!
//! ```text
//! G(i,j,k) = -4π · W² / (i² + j² + k²) · 1 / (8 · n³)
//! ```
//!
//! where `1/(8n³)` folds in the unnormalized-DFT round trip, and the DC
//! mode (index 0) is zeroed.
//!
//! NOTE: the raw integer triple `(i,j,k)` is used as the wavenumber, not
//! the aliased form `i - n·[i > n/2]` or a `sin(πi/n)` variant. Changing
//! this changes every published result; see DESIGN.md before touching it.

use std::f64::consts::PI;

use rayon::prelude::*;
use rustfft::num_complex::Complex;

use crate::simulation::mesh::Mesh;

/// Scale `mesh.k_space` in place by the Green's-function factor.
pub fn apply_greens_function(mesh: &mut Mesh, box_width: f64) {
    let n = mesh.n_cells();
    let norm = 8.0 * mesh.cell_count() as f64;
    let w2 = box_width * box_width;

    mesh.k_space
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, value)| {
            if index == 0 {
                *value = Complex::new(0.0, 0.0);
                return;
            }
            let (i, j, k) = Mesh::decode(n, index);
            let k2 = (i * i + j * j + k * k) as f64;
            *value *= -4.0 * PI * w2 / (k2 * norm);
        });
}
