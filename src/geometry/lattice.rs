/// Periodic rectangular lattice with a precomputed neighbor table.
///
/// Sites are indexed in row-major order with x outer: site `(x, y)` has
/// flat index `x * ny + y`. For every site the table stores the forward
/// and backward periodic neighbor in each dimension (`d = 0` is x,
/// `d = 1` is y), so the four nearest neighbors of a site are exactly its
/// four table entries. The wrap arithmetic is correct for any positive
/// extent, powers of 2 are not required.
pub struct Lattice {
    /// Extent along x.
    pub nx: usize,
    /// Extent along y.
    pub ny: usize,
    /// Total number of sites (`nx * ny`).
    pub n_sites: usize,
    /// Layout: `neighbors[(i * 2 + d) * 2 + dir]`, `dir = 0` forward,
    /// `dir = 1` backward.
    neighbors: Vec<u32>,
}

impl Lattice {
    pub fn new(nx: usize, ny: usize) -> Self {
        assert!(
            nx >= 1 && ny >= 1,
            "lattice extents must be >= 1, got {nx}x{ny}"
        );
        let n_sites = nx * ny;

        let mut neighbors = vec![0u32; n_sites * 4];
        for x in 0..nx {
            for y in 0..ny {
                let i = x * ny + y;
                let xf = if x + 1 == nx { 0 } else { x + 1 };
                let xb = if x == 0 { nx - 1 } else { x - 1 };
                let yf = if y + 1 == ny { 0 } else { y + 1 };
                let yb = if y == 0 { ny - 1 } else { y - 1 };

                let base = i * 4;
                neighbors[base] = (xf * ny + y) as u32;
                neighbors[base + 1] = (xb * ny + y) as u32;
                neighbors[base + 2] = (x * ny + yf) as u32;
                neighbors[base + 3] = (x * ny + yb) as u32;
            }
        }

        Self {
            nx,
            ny,
            n_sites,
            neighbors,
        }
    }

    /// Flat index of site `(x, y)`.
    #[inline]
    pub fn site(&self, x: usize, y: usize) -> usize {
        x * self.ny + y
    }

    /// Forward neighbor of site `flat_idx` in dimension `d` (0 = x, 1 = y).
    #[inline]
    pub fn neighbor_fwd(&self, flat_idx: usize, d: usize) -> usize {
        self.neighbors[(flat_idx * 2 + d) * 2] as usize
    }

    /// Backward neighbor of site `flat_idx` in dimension `d` (0 = x, 1 = y).
    #[inline]
    pub fn neighbor_bwd(&self, flat_idx: usize, d: usize) -> usize {
        self.neighbors[(flat_idx * 2 + d) * 2 + 1] as usize
    }

    /// Number of nearest-neighbor bonds (`2 * nx * ny`), each counted once.
    #[inline]
    pub fn n_bonds(&self) -> usize {
        2 * self.n_sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_3x4_neighbors() {
        let lat = Lattice::new(3, 4);
        assert_eq!(lat.n_sites, 12);
        assert_eq!(lat.n_bonds(), 24);

        // Site 0 = (0,0): forward in x -> (1,0)=4, forward in y -> (0,1)=1
        assert_eq!(lat.neighbor_fwd(0, 0), 4);
        assert_eq!(lat.neighbor_fwd(0, 1), 1);

        // Site 0 = (0,0): backward in x -> (2,0)=8 (wrap), backward in y -> (0,3)=3 (wrap)
        assert_eq!(lat.neighbor_bwd(0, 0), 8);
        assert_eq!(lat.neighbor_bwd(0, 1), 3);

        // Site 11 = (2,3): forward in x -> (0,3)=3 (wrap), forward in y -> (2,0)=8 (wrap)
        assert_eq!(lat.neighbor_fwd(11, 0), 3);
        assert_eq!(lat.neighbor_fwd(11, 1), 8);
    }

    #[test]
    fn test_2x2_doubled_neighbors() {
        // On a 2-torus every site has 2 distinct neighbor identities, each doubled.
        let lat = Lattice::new(2, 2);
        assert_eq!(lat.neighbor_fwd(0, 0), 2);
        assert_eq!(lat.neighbor_bwd(0, 0), 2);
        assert_eq!(lat.neighbor_fwd(0, 1), 1);
        assert_eq!(lat.neighbor_bwd(0, 1), 1);
    }

    #[test]
    fn test_extent_one_self_neighbor() {
        // nx = 1 wraps onto itself in x.
        let lat = Lattice::new(1, 5);
        for i in 0..5 {
            assert_eq!(lat.neighbor_fwd(i, 0), i);
            assert_eq!(lat.neighbor_bwd(i, 0), i);
        }
        assert_eq!(lat.neighbor_fwd(4, 1), 0);
    }

    #[test]
    fn test_site_indexing() {
        let lat = Lattice::new(3, 4);
        assert_eq!(lat.site(0, 0), 0);
        assert_eq!(lat.site(1, 0), 4);
        assert_eq!(lat.site(2, 3), 11);
    }
}
