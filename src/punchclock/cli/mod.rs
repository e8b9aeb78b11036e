//! # CLI
//!
//! One possible client for the punchclock library. This is the only place that
//! knows about terminal output and exit codes.
//!
//! - `setup`: clap argument definitions
//! - `commands`: context setup and dispatch to the API
//! - `print`: message and config output

mod commands;
mod print;
pub mod setup;

pub use commands::run;
