use rand::Rng;

/// Probability that a freshly initialized site starts spin-down.
///
/// The asymmetry biases the starting configuration toward positive
/// magnetization; it only affects transient behavior, not the
/// equilibrium distribution.
const SPIN_DOWN_PROBABILITY: f64 = 0.3;

/// Square spin lattice with toroidal (periodic) boundary conditions.
///
/// Each site holds a spin of exactly +1 or -1 at every point in time.
/// The grid is allocated once, mutated one site at a time, and never
/// resized. Only the Metropolis engine flips sites; everything else
/// reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    size: usize,
    spins: Vec<i8>,
}

impl Lattice {
    /// Create a lattice with each site drawn independently: -1 with
    /// probability 0.3, +1 otherwise.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        assert!(size >= 2, "lattice side length must be at least 2");
        let spins = (0..size * size)
            .map(|_| {
                if rng.gen_bool(SPIN_DOWN_PROBABILITY) {
                    -1
                } else {
                    1
                }
            })
            .collect();
        Self { size, spins }
    }

    /// Create a lattice with every site set to `spin` (+1 or -1).
    pub fn ordered(size: usize, spin: i8) -> Self {
        assert!(size >= 2, "lattice side length must be at least 2");
        assert!(spin == 1 || spin == -1, "spin must be +1 or -1");
        Self {
            size,
            spins: vec![spin; size * size],
        }
    }

    /// Side length N of the N x N grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Map any integer coordinate onto its canonical representative in
    /// [0, N). Pure; applied on every neighbor lookup.
    #[inline]
    pub fn wrap(&self, coord: i64) -> usize {
        let n = self.size as i64;
        (((coord % n) + n) % n) as usize
    }

    /// Spin at an in-range (row, column) coordinate.
    #[inline]
    pub fn spin(&self, row: usize, col: usize) -> i8 {
        debug_assert!(row < self.size && col < self.size);
        self.spins[row * self.size + col]
    }

    /// Spin at an arbitrary integer coordinate, wrapped onto the torus.
    #[inline]
    pub fn spin_wrapped(&self, row: i64, col: i64) -> i8 {
        let row = self.wrap(row);
        let col = self.wrap(col);
        self.spins[row * self.size + col]
    }

    /// Invert the sign of exactly one site. The only mutation the
    /// lattice permits.
    #[inline]
    pub fn flip(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.size && col < self.size);
        self.spins[row * self.size + col] *= -1;
    }

    /// Mean spin (sum of all spins) / N^2, always in [-1, +1].
    ///
    /// Full O(N^2) scan; recomputed from the grid on every call rather
    /// than tracked incrementally.
    pub fn magnetization(&self) -> f64 {
        let sum: i64 = self.spins.iter().map(|&s| s as i64).sum();
        sum as f64 / (self.size * self.size) as f64
    }

    /// Iterate over all spins in row-major order.
    pub fn spins(&self) -> impl Iterator<Item = i8> + '_ {
        self.spins.iter().copied()
    }
}
