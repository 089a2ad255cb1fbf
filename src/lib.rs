//! 2D Ising model Metropolis Monte Carlo simulator.
//!
//! A square spin lattice on a torus evolves one single-site Metropolis
//! trial at a time; every reporting interval the bulk magnetization is
//! recomputed, a coarse ASCII window of the lattice is redrawn in
//! place, and the value is appended to a persistent log.

pub mod config;
pub mod display;
pub mod lattice;
pub mod metropolis;
pub mod report;
pub mod simulation;

pub use display::{DisplaySink, TerminalDisplay};
pub use lattice::Lattice;
pub use metropolis::Metropolis;
pub use report::MagnetizationLog;
pub use simulation::Simulation;
