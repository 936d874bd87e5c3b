use crate::geometry::Lattice;
use crate::rng::UniformSource;

/// Count how many of the four periodic neighbors of site `i` hold `value`.
#[inline]
fn count_aligned(lattice: &Lattice, spins: &[u8], i: usize, value: u8) -> i32 {
    let mut same = 0;
    for d in 0..2 {
        same += (spins[lattice.neighbor_fwd(i, d)] == value) as i32;
        same += (spins[lattice.neighbor_bwd(i, d)] == value) as i32;
    }
    same
}

/// One Metropolis sweep: visit every site once in flat (row-major) order
/// and propose a single spin change per site.
///
/// Per site, exactly two uniform draws are consumed, in this order:
/// one to pick the trial spin, one for the accept test. The trial spin is
/// drawn uniformly from the q-1 states other than the current one via
/// `(cur + 1 + floor(u * (q-1))) mod q`, so no draw is ever wasted on a
/// self-proposal. A move with energy change `delta_e` (misaligned-bond
/// count after minus before) is accepted iff `exp(-beta * delta_e) > u2`,
/// which accepts every non-increasing move without a branch.
///
/// Updates are applied in place, so later sites in the same sweep see
/// earlier flips. That single-pass ordering is part of the algorithm, and
/// reproducibility of a run hinges on it together with the fixed
/// two-draws-per-site consumption of the random stream.
///
/// Preconditions (validated by `ModelConfig`, not re-checked here):
/// `1 <= q <= Q_MAX`, `beta >= 0`, every element of `spins` in `[0, q-1]`.
pub fn metropolis_sweep<S: UniformSource>(
    lattice: &Lattice,
    spins: &mut [u8],
    beta: f64,
    q: u8,
    src: &mut S,
) {
    debug_assert_eq!(spins.len(), lattice.n_sites);

    for i in 0..lattice.n_sites {
        let cur = spins[i];
        let same_cur = count_aligned(lattice, spins, i, cur);

        let u = src.next_uniform();
        let trial = ((cur as u32 + 1 + (u * (q as f64 - 1.0)) as u32) % q as u32) as u8;

        let same_trial = count_aligned(lattice, spins, i, trial);
        let delta_e = (same_cur - same_trial) as f64;

        if (-beta * delta_e).exp() > src.next_uniform() {
            spins[i] = trial;
        }
    }
}

/// Assign every site an independent uniform label in `[0, q-1]`.
///
/// Sites are visited in the same flat order as [`metropolis_sweep`], one
/// draw per site.
pub fn init_spins<S: UniformSource>(spins: &mut [u8], q: u8, src: &mut S) {
    for s in spins.iter_mut() {
        *s = (src.next_uniform() * q as f64) as u8;
    }
}
