//! Ising simulator command-line entry point.

use std::fmt;
use std::time::SystemTime;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

use ising2d::config::Args;
use ising2d::{Lattice, MagnetizationLog, Metropolis, Simulation, TerminalDisplay};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let duration = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        let total_seconds = duration.as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Log to stderr: stdout belongs to the frame renderer.
fn setup_logging() {
    let stderr_layer = layer()
        .with_writer(std::io::stderr)
        .with_timer(SecondPrecisionTimer)
        .with_ansi(false);
    Registry::default().with(stderr_layer).init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    setup_logging();

    let args = Args::parse();
    args.validate()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        size = args.size,
        temperature = args.temperature,
        coupling = args.coupling,
        field = args.field,
        report_interval = args.report_interval,
        "initializing lattice"
    );

    let lattice = Lattice::random(args.size, &mut rng);
    let engine = Metropolis::new(rng);
    let display = TerminalDisplay::stdout(args.plot_size)
        .wrap_err("unable to take control of the terminal")?;
    let log = MagnetizationLog::create(&args.log_file).wrap_err_with(|| {
        format!(
            "unable to create magnetization log: {}",
            args.log_file.display()
        )
    })?;

    let mut simulation = Simulation::new(
        lattice,
        engine,
        display,
        log,
        args.effective_coupling(),
        args.effective_field(),
        args.report_interval,
    );

    info!("starting simulation; terminate externally to stop");
    simulation
        .run()
        .wrap_err("reporting path failed; aborting the run")
}
