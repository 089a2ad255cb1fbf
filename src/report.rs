use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Append-only time series of magnetization samples.
///
/// The file is truncated at startup so each run owns its series; one
/// decimal value per line. Write failures are fatal to the caller:
/// resuming without the log would silently corrupt the series.
#[derive(Debug)]
pub struct MagnetizationLog {
    file: File,
}

impl MagnetizationLog {
    /// Create (or truncate) the log at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            file: File::create(path)?,
        })
    }

    /// Append one sample, flushed so the series survives an external
    /// kill mid-run.
    pub fn append(&mut self, magnetization: f64) -> io::Result<()> {
        writeln!(self.file, "{:.6}", magnetization)?;
        self.file.flush()
    }
}
