use std::io;

use rand::Rng;
use tracing::debug;

use crate::display::DisplaySink;
use crate::lattice::Lattice;
use crate::metropolis::Metropolis;
use crate::report::MagnetizationLog;

/// Drives the unbounded update/report loop.
///
/// The driver owns the lattice and lends it to the engine one trial at
/// a time; no other component mutates it. Every `report_interval`
/// iterations the current magnetization is recomputed, a frame is
/// rendered, and the value is appended to the log. The iteration
/// counter wraps freely since only its value modulo the interval is
/// observed.
pub struct Simulation<R: Rng, D: DisplaySink> {
    lattice: Lattice,
    engine: Metropolis<R>,
    display: D,
    log: MagnetizationLog,
    effective_j: f64,
    effective_h: f64,
    report_interval: u64,
    iteration: u64,
}

impl<R: Rng, D: DisplaySink> Simulation<R, D> {
    pub fn new(
        lattice: Lattice,
        engine: Metropolis<R>,
        display: D,
        log: MagnetizationLog,
        effective_j: f64,
        effective_h: f64,
        report_interval: u64,
    ) -> Self {
        assert!(report_interval >= 1, "report interval must be positive");
        Self {
            lattice,
            engine,
            display,
            log,
            effective_j,
            effective_h,
            report_interval,
            iteration: 0,
        }
    }

    /// One Metropolis trial, plus a report when the counter lands on
    /// the interval. The first report follows the first update.
    pub fn step(&mut self) -> io::Result<()> {
        self.engine
            .attempt_update(&mut self.lattice, self.effective_j, self.effective_h);
        let due = self.iteration % self.report_interval == 0;
        self.iteration = self.iteration.wrapping_add(1);
        if due {
            self.report()?;
        }
        Ok(())
    }

    /// Reporting path: recompute magnetization over the full lattice,
    /// redraw the display window, append to the log.
    pub fn report(&mut self) -> io::Result<()> {
        let m = self.lattice.magnetization();
        self.display.reset_cursor()?;
        self.display.render_frame(&self.lattice, m)?;
        self.log.append(m)?;
        debug!(
            iteration = self.iteration,
            magnetization = m,
            acceptance_rate = self.engine.acceptance_rate(),
            "report"
        );
        Ok(())
    }

    /// Run until externally terminated. There is no internal stop
    /// condition.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.step()?;
        }
    }

    /// Run a bounded number of iterations. Used by tests.
    pub fn run_for(&mut self, iterations: u64) -> io::Result<()> {
        for _ in 0..iterations {
            self.step()?;
        }
        Ok(())
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }
}
