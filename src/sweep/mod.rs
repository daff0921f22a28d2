//! Expansion-factor sweep: one coordinator, many shared-nothing workers.
//!
//! Each rank runs one independent simulation; nothing is shared between
//! them but the point-to-point message channels. The wire protocol is four
//! tagged messages, carried here by one channel pair per peer:
//!
//! - tag 0: coordinator → peer, minimum expansion factor (`f64`)
//! - tag 1: coordinator → peer, expansion-factor step (`f64`)
//! - tag 2: peer → coordinator, correlation vector length (`u32`)
//! - tag 3: peer → coordinator, the correlation values (`f64`s)
//!
//! Rank `r` simulates with `a = a_min + r·step`; the coordinator is rank 0
//! and runs its own simulation (at `a = a_min`) between sending the
//! scalars and collecting the peers. Any out-of-order message or closed
//! channel aborts the whole sweep.

use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use anyhow::{bail, Result};
use log::error;

use crate::configuration::config::SweepConfig;
use crate::simulation::correlation::correlation_function;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::ParticleGroup;

/// One protocol message; the variant order mirrors the tag numbers.
#[derive(Debug)]
pub enum Message {
    MinExpansion(f64),    // tag 0
    ExpansionStep(f64),   // tag 1
    VectorSize(u32),      // tag 2
    Correlation(Vec<f64>), // tag 3
}

/// Everything the coordinator gathers: rank-ordered expansion factors and
/// their correlation vectors.
#[derive(Debug)]
pub struct SweepResult {
    pub expansion_factors: Vec<f64>,
    pub correlations: Vec<Vec<f64>>,
}

/// Run `num_workers` simulations across the `[a_min, a_max]` expansion
/// range and gather their correlation functions.
///
/// `num_workers` includes the coordinator and must be at least 2: the
/// step is `(a_max − a_min)/(num_workers − 1)`, so a lone coordinator
/// would divide by zero.
///
/// Only the coordinator's own simulation snapshots into `output_dir`.
pub fn run_sweep(
    config: &SweepConfig,
    a_min: f64,
    a_max: f64,
    num_workers: usize,
    output_dir: Option<&Path>,
) -> Result<SweepResult> {
    if num_workers < 2 {
        bail!("the sweep needs at least 2 workers, got {num_workers}");
    }
    let step = (a_max - a_min) / (num_workers - 1) as f64;

    thread::scope(|scope| {
        let mut to_peers: Vec<Sender<Message>> = Vec::with_capacity(num_workers - 1);
        let mut from_peers: Vec<Receiver<Message>> = Vec::with_capacity(num_workers - 1);

        for rank in 1..num_workers {
            let (command_tx, command_rx) = std::sync::mpsc::channel();
            let (result_tx, result_rx) = std::sync::mpsc::channel();
            to_peers.push(command_tx);
            from_peers.push(result_rx);

            let config = config.clone();
            scope.spawn(move || {
                if let Err(e) = worker(rank, &config, command_rx, result_tx) {
                    error!("sweep worker {rank} failed: {e}");
                }
            });
        }

        for tx in &to_peers {
            tx.send(Message::MinExpansion(a_min))?;
            tx.send(Message::ExpansionStep(step))?;
        }

        // Rank 0 computes its own scenario while the peers run theirs.
        let mut expansion_factors = vec![a_min];
        let mut correlations = vec![run_scenario(config, a_min, output_dir)?];

        for (index, rx) in from_peers.iter().enumerate() {
            let rank = index + 1;
            expansion_factors.push(a_min + rank as f64 * step);

            let size = match rx.recv()? {
                Message::VectorSize(size) => size as usize,
                other => bail!("peer {rank}: expected vector size, got {other:?}"),
            };
            let values = match rx.recv()? {
                Message::Correlation(values) => values,
                other => bail!("peer {rank}: expected correlation values, got {other:?}"),
            };
            if values.len() != size {
                bail!(
                    "peer {rank}: announced {size} correlation values, sent {}",
                    values.len()
                );
            }
            correlations.push(values);
        }

        Ok(SweepResult {
            expansion_factors,
            correlations,
        })
    })
}

/// Non-coordinator rank: receive the two scalars, run the assigned
/// scenario, send the correlation vector back.
fn worker(
    rank: usize,
    config: &SweepConfig,
    rx: Receiver<Message>,
    tx: Sender<Message>,
) -> Result<()> {
    let a_min = match rx.recv()? {
        Message::MinExpansion(value) => value,
        other => bail!("worker {rank}: expected minimum expansion factor, got {other:?}"),
    };
    let step = match rx.recv()? {
        Message::ExpansionStep(value) => value,
        other => bail!("worker {rank}: expected expansion step, got {other:?}"),
    };

    let correlation = run_scenario(config, a_min + rank as f64 * step, None)?;
    tx.send(Message::VectorSize(correlation.len() as u32))?;
    tx.send(Message::Correlation(correlation))?;
    Ok(())
}

/// Build, run, and measure one simulation at expansion factor `a`.
fn run_scenario(config: &SweepConfig, a: f64, output_dir: Option<&Path>) -> Result<Vec<f64>> {
    let group = ParticleGroup::new(config.particle_mass(), config.num_particles(), config.seed);
    let parameters = Parameters {
        time_max: config.time_max,
        time_step: config.time_step,
        box_width: config.box_width,
        num_cells: config.num_cells,
        expansion_factor: a,
    };
    let mut simulation = Simulation::new(parameters, group)?;
    simulation.run(output_dir)?;
    Ok(correlation_function(
        simulation.particle_collection(),
        config.num_bins,
    ))
}
