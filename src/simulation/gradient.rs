//! Central-difference gradient of the potential.
//!
//! Produces the dense vector field the integrator samples with an NGP
//! lookup, one `NVec3` per cell. Neighbour indices wrap modulo `n_cells`,
//! so the gradient at a face cell reaches across the periodic boundary.
//! Imaginary parts of the potential are ignored.

use rayon::prelude::*;
use rustfft::num_complex::Complex;

use crate::simulation::mesh::Mesh;
use crate::simulation::states::NVec3;

/// Fill `out` with `∇φ` of the real part of `potential`, spacing
/// `cell_width` per cell. `out` must have length `n_cells³`.
pub fn potential_gradient(
    potential: &[Complex<f64>],
    n_cells: usize,
    cell_width: f64,
    out: &mut [NVec3],
) {
    let n = n_cells;
    let inv_2h = 1.0 / (2.0 * cell_width);

    out.par_iter_mut().enumerate().for_each(|(index, cell)| {
        let (i, j, k) = Mesh::decode(n, index);
        let i_up = (i + 1) % n;
        let i_dn = (i + n - 1) % n;
        let j_up = (j + 1) % n;
        let j_dn = (j + n - 1) % n;
        let k_up = (k + 1) % n;
        let k_dn = (k + n - 1) % n;

        let gx = (potential[Mesh::index(n, i_up, j, k)].re
            - potential[Mesh::index(n, i_dn, j, k)].re)
            * inv_2h;
        let gy = (potential[Mesh::index(n, i, j_up, k)].re
            - potential[Mesh::index(n, i, j_dn, k)].re)
            * inv_2h;
        let gz = (potential[Mesh::index(n, i, j, k_up)].re
            - potential[Mesh::index(n, i, j, k_dn)].re)
            * inv_2h;

        *cell = NVec3::new(gx, gy, gz);
    });
}
