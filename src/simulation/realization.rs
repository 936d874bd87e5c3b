use crate::geometry::Lattice;
use crate::mcmc::sweep::init_spins;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Spin configuration and generator state for one independent run.
///
/// The run loop threads `rng` through every sweep sequentially, so a
/// `(lattice, q, seed)` triple pins down the whole trajectory.
pub struct Realization {
    /// Spin labels, length `n_sites`, each in `[0, q-1]`.
    pub spins: Vec<u8>,
    /// Generator driving this run.
    pub rng: Xoshiro256StarStar,
}

impl Realization {
    /// Random initial configuration, generator seeded from `seed`.
    pub fn new(lattice: &Lattice, q: u8, seed: u64) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut spins = vec![0u8; lattice.n_sites];
        init_spins(&mut spins, q, &mut rng);
        Self { spins, rng }
    }

    /// Resume from a checkpointed spin configuration.
    ///
    /// The on-disk format (nx*ny integers in site order) is the driver's
    /// concern; this validates length and label range so a corrupt
    /// checkpoint is rejected before it can poison a run.
    pub fn from_spins(
        lattice: &Lattice,
        q: u8,
        spins: Vec<u8>,
        seed: u64,
    ) -> Result<Self, String> {
        if spins.len() != lattice.n_sites {
            return Err(format!(
                "checkpoint holds {} spins, lattice has {} sites",
                spins.len(),
                lattice.n_sites
            ));
        }
        if let Some(&bad) = spins.iter().find(|&&s| s >= q) {
            return Err(format!("checkpoint spin value {bad} out of range for q = {q}"));
        }

        Ok(Self {
            spins,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        })
    }

    /// Re-randomize the spins and reseed the generator.
    pub fn reset(&mut self, q: u8, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
        init_spins(&mut self.spins, q, &mut self.rng);
    }
}
