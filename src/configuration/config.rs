//! Run configuration for the sweep driver, loadable from YAML.
//!
//! Every field has a default, so an empty file (or no file at all) runs
//! the standard comparison scenario. Example:
//!
//! ```yaml
//! num_cells: 101          # mesh cells per axis
//! particles_per_cell: 13  # average particles per cell
//! box_width: 100.0        # initial physical box width
//! total_mass: 1.0e5       # split evenly across all particles
//! time_max: 1.5
//! time_step: 0.01
//! seed: 42                # deterministic seed for initial positions
//! num_bins: 101           # correlation histogram bins
//! ```
//!
//! The expansion factor is deliberately absent: the sweep assigns one per
//! worker from the `--emin`/`--emax` range.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::correlation::DEFAULT_NUM_BINS;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SweepConfig {
    pub num_cells: usize,          // mesh cells per axis
    pub particles_per_cell: usize, // average particle count per cell
    pub box_width: f64,            // initial physical box width
    pub total_mass: f64,           // shared evenly across all particles
    pub time_max: f64,             // total integration time
    pub time_step: f64,            // step size
    pub seed: u64,                 // deterministic seed for initial positions
    pub num_bins: usize,           // correlation histogram bins
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            num_cells: 101,
            particles_per_cell: 13,
            box_width: 100.0,
            total_mass: 1.0e5,
            time_max: 1.5,
            time_step: 0.01,
            seed: 42,
            num_bins: DEFAULT_NUM_BINS,
        }
    }
}

impl SweepConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        let config = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn num_particles(&self) -> usize {
        self.num_cells * self.num_cells * self.num_cells * self.particles_per_cell
    }

    pub fn particle_mass(&self) -> f64 {
        self.total_mass / self.num_particles() as f64
    }
}
