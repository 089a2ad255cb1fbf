//! Command-line parameters for the simulator.
//!
//! The defaults reproduce the historical constants of this simulation
//! (600-site lattice, 80-row display window, T=1.0, J=0.44, H=0.001,
//! one report per 100000 trials), so running with no flags behaves like
//! the fixed-constant original.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{ensure, Result};

/// 2D Ising lattice Metropolis Monte Carlo simulator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Lattice side length N (the grid is N x N)
    #[arg(long, default_value_t = 600)]
    pub size: usize,

    /// Display window height P; the rendered window is P rows by 2P columns
    #[arg(long, default_value_t = 80)]
    pub plot_size: usize,

    /// Temperature T
    #[arg(short, long, default_value_t = 1.0)]
    pub temperature: f64,

    /// Nearest-neighbor coupling strength J
    #[arg(short = 'j', long, default_value_t = 0.44)]
    pub coupling: f64,

    /// External field H
    #[arg(long, default_value_t = 0.001)]
    pub field: f64,

    /// Number of update trials between reports
    #[arg(long, default_value_t = 100_000)]
    pub report_interval: u64,

    /// RNG seed for reproducible runs (default: seeded from entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path of the magnetization log file
    #[arg(long, default_value = "magnetization")]
    pub log_file: PathBuf,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.size >= 2, "lattice size must be at least 2");
        ensure!(
            self.temperature > 0.0,
            "temperature must be strictly positive"
        );
        ensure!(self.report_interval >= 1, "report interval must be positive");
        ensure!(
            self.plot_size * 2 <= self.size,
            "display window ({} x {}) does not fit a {}-site lattice",
            self.plot_size,
            self.plot_size * 2,
            self.size
        );
        Ok(())
    }

    /// Effective coupling J/T consumed by the update rule.
    pub fn effective_coupling(&self) -> f64 {
        self.coupling / self.temperature
    }

    /// Effective field H/T consumed by the update rule.
    pub fn effective_field(&self) -> f64 {
        self.field / self.temperature
    }
}
