//! File writers for the sweep driver's observables.
//!
//! These are the external collaborators of the solver: a density-slice
//! snapshot (`write_density`), the correlation CSV, and the
//! significant-figure formatting used for expansion factors in headers and
//! file names. None of them touch simulation state.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rustfft::num_complex::Complex;

use crate::simulation::mesh::Mesh;

/// Write the mid-plane slice (`k = n/2`) of a density field as an ASCII
/// PGM image, gray levels normalized to the slice maximum.
pub fn write_density(field: &[Complex<f64>], n_cells: usize, path: &Path) -> Result<()> {
    let plane = n_cells / 2;
    let mut slice = vec![0.0f64; n_cells * n_cells];
    let mut max = 0.0f64;
    for i in 0..n_cells {
        for j in 0..n_cells {
            let value = field[Mesh::index(n_cells, i, j, plane)].re;
            slice[j + n_cells * i] = value;
            max = max.max(value);
        }
    }

    let file =
        File::create(path).with_context(|| format!("creating snapshot {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "P2")?;
    writeln!(out, "{n_cells} {n_cells}")?;
    writeln!(out, "255")?;
    for i in 0..n_cells {
        let row: Vec<String> = (0..n_cells)
            .map(|j| {
                let value = slice[j + n_cells * i];
                let level = if max > 0.0 {
                    (value / max * 255.0).round() as u8
                } else {
                    0
                };
                level.to_string()
            })
            .collect();
        writeln!(out, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Save correlation vectors as CSV: one column per expansion factor, the
/// header row holding the formatted factors, one row per bin.
///
/// Values use `f64`'s shortest round-trip formatting.
pub fn save_correlations_csv(
    correlations: &[Vec<f64>],
    headers: &[String],
    path: &Path,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{}", headers.join(","))?;

    let rows = correlations.first().map_or(0, Vec::len);
    for row in 0..rows {
        let line: Vec<String> = correlations
            .iter()
            .map(|column| column[row].to_string())
            .collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

/// Format `value` with a fixed number of significant figures, used for
/// expansion factors in CSV headers and file names.
///
/// `format_sig_figs(1.02, 3)` is `"1.02"`, `format_sig_figs(194.98, 3)`
/// is `"195"`.
pub fn format_sig_figs(value: f64, figures: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (figures as i32 - 1 - magnitude).max(0) as usize;
    format!("{value:.decimals$}")
}
