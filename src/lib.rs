pub mod simulation;
pub mod configuration;
pub mod sweep;
pub mod output;
pub mod benchmark;

pub use simulation::states::{Particle, ParticleGroup, NVec3};
pub use simulation::params::Parameters;
pub use simulation::mesh::Mesh;
pub use simulation::engine::Simulation;
pub use simulation::correlation::{correlation_function, DEFAULT_NUM_BINS};

pub use configuration::config::SweepConfig;

pub use sweep::{run_sweep, Message, SweepResult};

pub use benchmark::benchmark::{bench_correlation, bench_deposit, bench_step};
