use rand::Rng;

use crate::lattice::Lattice;

/// Single-site Metropolis update engine.
///
/// Each call to [`attempt_update`](Metropolis::attempt_update) performs
/// exactly one spin-flip trial at a uniformly random site. The engine
/// owns the run's random source; making it generic over [`Rng`] lets
/// tests substitute a deterministic draw sequence.
#[derive(Debug)]
pub struct Metropolis<R: Rng> {
    rng: R,
    /// Number of trials attempted so far.
    pub attempts: u64,
    /// Number of trials that flipped a spin.
    pub accepted: u64,
}

impl<R: Rng> Metropolis<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            attempts: 0,
            accepted: 0,
        }
    }

    /// Perform one Metropolis trial and report whether it was accepted.
    ///
    /// The parameters are the *effective* coupling J/T and field H/T, so
    /// temperature scales both interaction terms symmetrically.
    ///
    /// 1. Draw a uniform random site (row, col).
    /// 2. Sum the four toroidal nearest neighbors.
    /// 3. dE = 2 * s * (effective_j * sum + effective_h), the energy cost
    ///    of flipping the site.
    /// 4. Accept unconditionally if dE < 0; otherwise accept iff
    ///    exp(-dE) exceeds a fresh uniform draw in [0, 1). The draw is
    ///    only consumed when dE >= 0.
    /// 5. On acceptance, flip that one site. Nothing else is mutated.
    pub fn attempt_update(
        &mut self,
        lattice: &mut Lattice,
        effective_j: f64,
        effective_h: f64,
    ) -> bool {
        let size = lattice.size();
        let row = self.rng.gen_range(0..size);
        let col = self.rng.gen_range(0..size);

        let (r, c) = (row as i64, col as i64);
        let neighbor_sum = (lattice.spin_wrapped(r, c + 1)
            + lattice.spin_wrapped(r, c - 1)
            + lattice.spin_wrapped(r + 1, c)
            + lattice.spin_wrapped(r - 1, c)) as f64;

        let spin = lattice.spin(row, col) as f64;
        let delta_e = 2.0 * spin * (effective_j * neighbor_sum + effective_h);

        self.attempts += 1;
        if delta_e < 0.0 || (-delta_e).exp() > self.rng.gen::<f64>() {
            lattice.flip(row, col);
            self.accepted += 1;
            true
        } else {
            false
        }
    }

    /// Fraction of trials accepted so far, or 0 before the first trial.
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }
}
