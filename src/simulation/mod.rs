pub mod realization;

pub use realization::Realization;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{ModelConfig, SimConfig};
use crate::geometry::Lattice;
use crate::mcmc::sweep::metropolis_sweep;
use crate::spins::{energy_per_bond, magnetization_into};
use crate::statistics::{Statistics, SweepResult};
use rayon::prelude::*;
use validator::Validate;

/// Run the Monte Carlo loop (warmup + measurement) for one [`Realization`].
///
/// Each sweep is one Metropolis pass over the whole lattice. After
/// `warmup_sweeps`, energy per bond and the magnetization vector are
/// measured every `measure_interval` sweeps. `on_sweep` is called once
/// per sweep (useful for progress bars).
///
/// Both configs are validated up front, so precondition violations fail
/// here instead of producing garbage samples.
pub fn run_sweep_loop(
    lattice: &Lattice,
    real: &mut Realization,
    model: &ModelConfig,
    config: &SimConfig,
    interrupted: &AtomicBool,
    on_sweep: &(dyn Fn() + Sync),
) -> Result<SweepResult, String> {
    model.validate().map_err(|e| format!("{e}"))?;
    config.validate().map_err(|e| format!("{e}"))?;
    if real.spins.len() != lattice.n_sites {
        return Err(format!(
            "realization holds {} spins, lattice has {} sites",
            real.spins.len(),
            lattice.n_sites
        ));
    }

    let q = model.q as usize;
    let mut energy_stat = Statistics::new(1, 1);
    let mut energy2_stat = Statistics::new(1, 2);
    let mut mag_stat = Statistics::new(q, 1);
    let mut mag_buf = vec![0.0f64; q];

    for sweep_id in 0..config.n_sweeps {
        if interrupted.load(Ordering::Relaxed) {
            return Err("interrupted".to_string());
        }
        on_sweep();

        metropolis_sweep(lattice, &mut real.spins, model.beta, model.q, &mut real.rng);

        let record = sweep_id >= config.warmup_sweeps
            && (sweep_id - config.warmup_sweeps) % config.measure_interval == 0;
        if record {
            let e = energy_per_bond(lattice, &real.spins);
            energy_stat.update(&[e]);
            energy2_stat.update(&[e]);
            magnetization_into(&real.spins, model.q, &mut mag_buf);
            mag_stat.update(&mag_buf);
        }
    }

    Ok(SweepResult {
        energy: energy_stat.average()[0],
        energy2: energy2_stat.average()[0],
        magnetization: mag_stat.average(),
        n_measurements: energy_stat.count,
    })
}

/// Run the sweep loop over independent realizations and average the
/// results via [`SweepResult::aggregate`].
///
/// Realizations run on the rayon pool unless `config.sequential` is set;
/// each owns a disjoint spin array and generator, so no site ever updates
/// concurrently with a neighbor it reads. A single realization is run
/// directly, skipping thread-pool overhead.
pub fn run_sweep_parallel(
    lattice: &Lattice,
    realizations: &mut [Realization],
    model: &ModelConfig,
    config: &SimConfig,
    interrupted: &AtomicBool,
    on_sweep: &(dyn Fn() + Sync),
) -> Result<SweepResult, String> {
    if realizations.len() == 1 {
        return run_sweep_loop(
            lattice,
            &mut realizations[0],
            model,
            config,
            interrupted,
            on_sweep,
        );
    }

    let results: Vec<Result<SweepResult, String>> = if config.sequential {
        realizations
            .iter_mut()
            .map(|real| run_sweep_loop(lattice, real, model, config, interrupted, on_sweep))
            .collect()
    } else {
        realizations
            .par_iter_mut()
            .map(|real| run_sweep_loop(lattice, real, model, config, interrupted, on_sweep))
            .collect()
    };

    let results: Vec<SweepResult> = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    Ok(SweepResult::aggregate(&results))
}
