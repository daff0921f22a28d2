//! Two-point correlation estimator over a completed particle group.
//!
//! Histograms the minimum-image separations of every unordered particle
//! pair into `num_bins` bins covering `[0, √3/2)` — half the unit-box
//! diagonal — then normalizes each bin against the pair count an ideal
//! uniform (Poisson) field of the same density would put into that shell:
//!
//! ```text
//! ξ(b) = DD(b) / [ N(N−1)/2 · (4π/3)(r_{b+1}³ − r_b³) ] − 1
//! ```
//!
//! The pair loop is O(N²) and is meant to run once at end-of-run; it
//! parallelizes over the outer index with one private histogram per
//! thread, reduced at the end to avoid contention.

use std::f64::consts::PI;

use rayon::prelude::*;

use crate::simulation::states::{NVec3, ParticleGroup};

/// Bin count used by the sweep driver.
pub const DEFAULT_NUM_BINS: usize = 101;

/// Estimate ξ(r) for `group` with `num_bins` equal-width bins.
///
/// Bins whose ideal Poisson pair count is zero (no pairs exist, e.g. a
/// single-particle group) are reported as `-1.0`: the data pair count is
/// zero there by construction, and `-1` is the estimator's value for an
/// empty bin.
pub fn correlation_function(group: &ParticleGroup, num_bins: usize) -> Vec<f64> {
    let r_max = 3.0_f64.sqrt() / 2.0;
    let bin_width = r_max / num_bins as f64;
    let particles = &group.particles;
    let n = particles.len();

    let counts = (0..n)
        .into_par_iter()
        .fold(
            || vec![0u64; num_bins],
            |mut bins, a| {
                let pa = &particles[a].position;
                for b in (a + 1)..n {
                    let r = minimum_image_distance(pa, &particles[b].position);
                    if r < r_max {
                        let bin = ((r / bin_width) as usize).min(num_bins - 1);
                        bins[bin] += 1;
                    }
                }
                bins
            },
        )
        .reduce(
            || vec![0u64; num_bins],
            |mut left, right| {
                for (l, r) in left.iter_mut().zip(right) {
                    *l += r;
                }
                left
            },
        );

    let total_pairs = n as f64 * (n as f64 - 1.0) / 2.0;
    (0..num_bins)
        .map(|b| {
            let r_low = b as f64 * bin_width;
            let r_high = (b + 1) as f64 * bin_width;
            let ideal = total_pairs * (4.0 * PI / 3.0) * (r_high.powi(3) - r_low.powi(3));
            if ideal == 0.0 {
                -1.0
            } else {
                counts[b] as f64 / ideal - 1.0
            }
        })
        .collect()
}

/// Componentwise minimum-image separation of two unit-box positions.
#[inline]
pub fn minimum_image_distance(a: &NVec3, b: &NVec3) -> f64 {
    let mut dx = (a.x - b.x).abs();
    let mut dy = (a.y - b.y).abs();
    let mut dz = (a.z - b.z).abs();
    if dx > 0.5 {
        dx = 1.0 - dx;
    }
    if dy > 0.5 {
        dy = 1.0 - dy;
    }
    if dz > 0.5 {
        dz = 1.0 - dz;
    }
    (dx * dx + dy * dy + dz * dz).sqrt()
}
