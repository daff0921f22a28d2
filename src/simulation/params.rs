//! Numerical and physical parameters for one simulation
//!
//! `Parameters` holds the runtime settings:
//! - integration step size and end time,
//! - initial physical box width and mesh resolution,
//! - per-step expansion factor

use anyhow::{bail, Result};
use log::warn;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub time_max: f64,         // time end
    pub time_step: f64,        // step size
    pub box_width: f64,        // initial physical box width
    pub num_cells: usize,      // mesh cells per axis
    pub expansion_factor: f64, // per-step multiplicative box growth
}

impl Parameters {
    /// Check the configuration before any simulation work happens.
    ///
    /// Non-positive times, widths, and factors, and a cell count of zero or
    /// beyond 32-bit signed range, are fatal. A contracting box
    /// (`expansion_factor < 1`) and a very large mesh (`num_cells > 400`)
    /// are permitted but warned about once, here.
    pub fn validate(&self) -> Result<()> {
        if !(self.time_max > 0.0) {
            bail!("time_max must be positive, got {}", self.time_max);
        }
        if !(self.time_step > 0.0) {
            bail!("time_step must be positive, got {}", self.time_step);
        }
        if !(self.box_width > 0.0) {
            bail!("box_width must be positive, got {}", self.box_width);
        }
        if !(self.expansion_factor > 0.0) {
            bail!(
                "expansion_factor must be positive, got {}",
                self.expansion_factor
            );
        }
        if self.num_cells == 0 {
            bail!("num_cells must be at least 1");
        }
        if self.num_cells > i32::MAX as usize {
            bail!(
                "num_cells {} does not fit a 32-bit signed int",
                self.num_cells
            );
        }
        if self.expansion_factor < 1.0 {
            warn!(
                "expansion factor {} is below 1: the box will contract",
                self.expansion_factor
            );
        }
        if self.num_cells > 400 {
            warn!(
                "num_cells {} exceeds 400: mesh buffers will be very large",
                self.num_cells
            );
        }
        Ok(())
    }
}
