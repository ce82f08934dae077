//! Command Line Interface (CLI) layer for icon-resizer.
//!
//! Defines argument parsing (`args`), error types (`errors`) and the
//! orchestration logic (`runner`). Every flag has a default, so running the
//! binary with no arguments resizes `.` into `../resized_icons` at 180x180.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
