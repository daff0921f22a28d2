//! Cubic mesh buffers and the pre-planned 3-D discrete Fourier transform.
//!
//! `Mesh` owns the three complex scalar fields of the solver — density,
//! k-space, and potential — all of length `n_cells³` in row-major order
//! with the index convention `idx(i,j,k) = k + n·(j + n·i)`, together with
//! the FFT plans that act on them. Owning plans and buffers in one struct
//! keeps their lifetimes identical: the buffers live exactly as long as
//! the plans that were built for them.
//!
//! The 3-D transform is composed from 1-D passes: the z axis runs over
//! contiguous lines, the y and x axes gather strided lines through a
//! reusable line buffer. Both directions are unnormalized, matching the
//! FFTW convention; the round-trip scale is folded into the Poisson
//! Green's-function factor.

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::simulation::states::NVec3;

pub struct Mesh {
    n_cells: usize,
    pub density: Vec<Complex<f64>>,
    pub k_space: Vec<Complex<f64>>,
    pub potential: Vec<Complex<f64>>,
    forward_plan: Arc<dyn Fft<f64>>,
    backward_plan: Arc<dyn Fft<f64>>,
    line: Vec<Complex<f64>>,    // gather buffer for strided axis passes
    scratch: Vec<Complex<f64>>, // rustfft in-place scratch
}

impl Mesh {
    pub fn new(n_cells: usize) -> Self {
        let len = n_cells * n_cells * n_cells;
        let zero = Complex::new(0.0, 0.0);

        let mut planner = FftPlanner::new();
        let forward_plan = planner.plan_fft_forward(n_cells);
        let backward_plan = planner.plan_fft_inverse(n_cells);
        let scratch_len = forward_plan
            .get_inplace_scratch_len()
            .max(backward_plan.get_inplace_scratch_len());

        Self {
            n_cells,
            density: vec![zero; len],
            k_space: vec![zero; len],
            potential: vec![zero; len],
            forward_plan,
            backward_plan,
            line: vec![zero; n_cells],
            scratch: vec![zero; scratch_len],
        }
    }

    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// Total number of cells, `n_cells³`.
    pub fn cell_count(&self) -> usize {
        self.density.len()
    }

    /// Row-major linear index: `k + n·(j + n·i)`.
    #[inline]
    pub fn index(n_cells: usize, i: usize, j: usize, k: usize) -> usize {
        k + n_cells * (j + n_cells * i)
    }

    /// Inverse of [`Mesh::index`].
    #[inline]
    pub fn decode(n_cells: usize, index: usize) -> (usize, usize, usize) {
        (
            index / (n_cells * n_cells),
            (index / n_cells) % n_cells,
            index % n_cells,
        )
    }

    /// Nearest-grid-point cell of a unit-box position.
    ///
    /// Positions are kept in `[0,1)` by the integrator, so the floor is
    /// already in range; the clamp only absorbs the case where rounding in
    /// `p · n` lands exactly on `n`.
    #[inline]
    pub fn cell_of(position: &NVec3, n_cells: usize) -> (usize, usize, usize) {
        let n = n_cells as f64;
        let top = n_cells - 1;
        (
            ((position.x * n).floor() as usize).min(top),
            ((position.y * n).floor() as usize).min(top),
            ((position.z * n).floor() as usize).min(top),
        )
    }

    /// Forward DFT: density → k-space.
    pub fn forward(&mut self) {
        self.k_space.copy_from_slice(&self.density);
        transform(
            &self.forward_plan,
            &mut self.k_space,
            self.n_cells,
            &mut self.line,
            &mut self.scratch,
        );
    }

    /// Backward DFT: k-space → potential.
    pub fn backward(&mut self) {
        self.potential.copy_from_slice(&self.k_space);
        transform(
            &self.backward_plan,
            &mut self.potential,
            self.n_cells,
            &mut self.line,
            &mut self.scratch,
        );
    }
}

/// Apply a 1-D plan along all three axes of a row-major cube in place.
fn transform(
    plan: &Arc<dyn Fft<f64>>,
    data: &mut [Complex<f64>],
    n: usize,
    line: &mut [Complex<f64>],
    scratch: &mut [Complex<f64>],
) {
    // z axis: lines are contiguous, rustfft transforms the whole buffer as
    // n² stacked length-n chunks
    plan.process_with_scratch(data, scratch);

    // y axis: stride n
    for i in 0..n {
        for k in 0..n {
            let base = k + n * n * i;
            for j in 0..n {
                line[j] = data[base + n * j];
            }
            plan.process_with_scratch(line, scratch);
            for j in 0..n {
                data[base + n * j] = line[j];
            }
        }
    }

    // x axis: stride n²
    for j in 0..n {
        for k in 0..n {
            let base = k + n * j;
            for i in 0..n {
                line[i] = data[base + n * n * i];
            }
            plan.process_with_scratch(line, scratch);
            for i in 0..n {
                data[base + n * n * i] = line[i];
            }
        }
    }
}
