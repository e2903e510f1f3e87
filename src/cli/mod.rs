/// CLI layer: argument parsing and report output.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{ReportCtx, write_error};
