/// Report output: stdout or `--output` file sink, error writing, debug timing.
use std::fs;
use std::path::PathBuf;

use crate::dex::DexError;

/// Output context passed to all commands.
pub struct ReportCtx {
    /// Expand pokemon reports with stats, abilities, and moves.
    pub expanded: bool,
    /// Report destination. `None` means stdout.
    pub output: Option<PathBuf>,
    /// When true, print request timing spans to stderr.
    pub debug: bool,
}

impl ReportCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(expanded: bool, output: Option<PathBuf>, debug: bool) -> Self {
        Self {
            expanded,
            output,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write an assembled report to the sink selected by `--output`.
///
/// The file receives exactly the text stdout would have received; a one-line
/// confirmation goes to stdout in the file case.
///
/// # Errors
///
/// Returns `DexError::ReportFile` when the output path cannot be written.
pub fn write_report(report: &str, ctx: &ReportCtx) -> Result<(), DexError> {
    match &ctx.output {
        Some(path) => {
            fs::write(path, report).map_err(|source| DexError::ReportFile {
                path: path.clone(),
                source,
            })?;
            println!("Report written to {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}

/// Write a terminal error to stderr.
pub fn write_error(err: &DexError) {
    eprintln!("Error: {err}");
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`ReportCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
