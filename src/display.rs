use std::io::{self, Write};

use crossterm::{cursor, execute, queue, style::Print};

use crate::lattice::Lattice;

/// Where simulation frames go.
///
/// The simulation core only needs two capabilities from its presentation
/// layer: put the cursor back at the top-left so the next frame
/// overwrites the last, and render one frame. Platform specifics live
/// entirely behind this trait.
pub trait DisplaySink {
    /// Move the cursor to the top-left of the output region.
    fn reset_cursor(&mut self) -> io::Result<()>;

    /// Render a frame: the top-left window of the lattice plus the
    /// current magnetization.
    fn render_frame(&mut self, lattice: &Lattice, magnetization: f64) -> io::Result<()>;
}

/// Terminal renderer for a fixed top-left window of the lattice.
///
/// Only rows [0, P) and columns [0, 2P) are drawn, one character per
/// site (`*` for +1, `.` for -1); magnetization is still computed over
/// the whole lattice. The window is twice as wide as tall because
/// terminal cells are roughly twice as tall as they are wide.
pub struct TerminalDisplay<W: Write> {
    out: W,
    plot_size: usize,
}

impl TerminalDisplay<io::Stdout> {
    /// Display on stdout with the cursor hidden for the life of the
    /// process.
    pub fn stdout(plot_size: usize) -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(out, cursor::Hide)?;
        Ok(Self { out, plot_size })
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, plot_size: usize) -> Self {
        Self { out, plot_size }
    }

    /// Recover the underlying writer; tests use this to inspect frames.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn reset_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, cursor::MoveTo(0, 0))
    }

    fn render_frame(&mut self, lattice: &Lattice, magnetization: f64) -> io::Result<()> {
        let rows = self.plot_size.min(lattice.size());
        let cols = (self.plot_size * 2).min(lattice.size());

        let mut line = String::with_capacity(cols + 1);
        for row in 0..rows {
            line.clear();
            for col in 0..cols {
                line.push(if lattice.spin(row, col) == 1 { '*' } else { '.' });
            }
            line.push('\n');
            queue!(self.out, Print(&line))?;
        }
        queue!(self.out, Print(format!("m={:.6}\n", magnetization)))?;
        self.out.flush()
    }
}
