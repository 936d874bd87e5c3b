use crate::geometry::Lattice;

/// Energy per bond: the fraction of mismatched nearest-neighbor bonds.
///
/// Scans every site and checks only its forward neighbor in each
/// dimension, so each of the `2 * nx * ny` undirected bonds is counted
/// exactly once. Returns a value in `[0, 1]`: 0 is fully ordered, 1 is
/// every bond mismatched. Pure — no mutation, no randomness.
pub fn energy_per_bond(lattice: &Lattice, spins: &[u8]) -> f64 {
    debug_assert_eq!(spins.len(), lattice.n_sites);

    let mut mismatched = 0u64;
    for i in 0..lattice.n_sites {
        let s = spins[i];
        mismatched += (s != spins[lattice.neighbor_fwd(i, 0)]) as u64;
        mismatched += (s != spins[lattice.neighbor_fwd(i, 1)]) as u64;
    }
    mismatched as f64 / lattice.n_bonds() as f64
}
