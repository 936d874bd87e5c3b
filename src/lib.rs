pub mod config;
pub mod geometry;
pub mod simulation;

mod mcmc;
mod rng;
mod spins;
mod statistics;

pub use config::{ModelConfig, SimConfig, Q_MAX};
pub use geometry::Lattice;
pub use mcmc::sweep::{init_spins, metropolis_sweep};
pub use rng::UniformSource;
pub use simulation::{run_sweep_loop, run_sweep_parallel, Realization};
pub use spins::{energy_per_bond, magnetization, magnetization_into};
pub use statistics::{Statistics, SweepResult};
