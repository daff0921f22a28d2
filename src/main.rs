use pmsim::output::{format_sig_figs, save_correlations_csv};
use pmsim::{run_sweep, SweepConfig};

use anyhow::Result;
use clap::Parser;

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Directory for the comparison CSV and density snapshots
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Smallest expansion factor in the sweep (rank 0 runs this one)
    #[arg(long)]
    emin: f64,

    /// Largest expansion factor in the sweep
    #[arg(long)]
    emax: f64,

    /// Number of parallel workers, coordinator included (at least 2)
    #[arg(short, long, default_value_t = 4)]
    num_workers: usize,

    /// Optional YAML file overriding the default run configuration
    #[arg(short = 'f', long)]
    config_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config_file {
        Some(path) => SweepConfig::load(path)?,
        None => SweepConfig::default(),
    };

    fs::create_dir_all(&args.output_dir)?;
    let result = run_sweep(
        &config,
        args.emin,
        args.emax,
        args.num_workers,
        Some(&args.output_dir),
    )?;

    let headers: Vec<String> = result
        .expansion_factors
        .iter()
        .map(|a| format_sig_figs(*a, 3))
        .collect();
    let file_name = format!(
        "Comparison_{}_{}_{}.csv",
        args.num_workers,
        format_sig_figs(args.emin, 3),
        format_sig_figs(args.emax, 3),
    );
    save_correlations_csv(&result.correlations, &headers, &args.output_dir.join(file_name))?;

    Ok(())
}
