use std::sync::atomic::AtomicBool;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use potts_sim::config::{ModelConfig, SimConfig};
use potts_sim::{run_sweep_parallel, Lattice, Realization};

const L: usize = 64;
const Q: u8 = 3;
// Near the q=3 critical coupling ln(1 + sqrt(3)).
const BETA: f64 = 1.005;
const N_SWEEPS: usize = 2000;
const N_RUNS: usize = 8;

fn main() {
    let lattice = Lattice::new(L, L);
    let mut realizations: Vec<Realization> = (0..N_RUNS)
        .map(|r| Realization::new(&lattice, Q, 42 + r as u64))
        .collect();

    let model = ModelConfig { q: Q, beta: BETA };
    let config = SimConfig {
        n_sweeps: N_SWEEPS,
        warmup_sweeps: N_SWEEPS / 4,
        measure_interval: 10,
        sequential: false,
    };

    let pb = ProgressBar::new((N_SWEEPS * N_RUNS) as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )
        .unwrap()
        .progress_chars("=> "),
    );
    pb.set_message("sweeps");

    let interrupted = AtomicBool::new(false);

    println!(
        "Lattice: {L}x{L}  |  q: {Q}  |  beta: {BETA}  |  Sweeps: {N_SWEEPS}  |  Runs: {N_RUNS}"
    );
    println!("{}", "-".repeat(70));

    let t0 = Instant::now();
    let result = run_sweep_parallel(
        &lattice,
        &mut realizations,
        &model,
        &config,
        &interrupted,
        &|| pb.inc(1),
    )
    .expect("simulation failed");
    pb.finish();

    let elapsed = t0.elapsed().as_secs_f64();
    let total_sweeps = (N_SWEEPS * N_RUNS) as f64;
    println!("{elapsed:.2} s  |  {:.0} sweeps/s", total_sweeps / elapsed);
    println!("<E>  = {:.5}", result.energy);
    println!("<E2> = {:.5}", result.energy2);
    for (s, m) in result.magnetization.iter().enumerate() {
        println!("M[{s}] = {m:.5}");
    }
}
