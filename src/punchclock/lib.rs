//! # Punchclock Architecture
//!
//! Punchclock appends clock-in records to a plain-text timeclock log:
//!
//! ```text
//! i 1970-01-01 12:00:00 INBOX:meeting
//! ```
//!
//! The library holds every rule about what gets written and where; the
//! `punchclock` binary is a thin client that parses arguments and maps errors
//! to exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints messages, picks exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Assembles raw input into validated parameters            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Renders, appends, and re-reads the log                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! 1. [`paths`]: the target must exist, be a regular file, and open for writing.
//! 2. [`params`]: user input is merged with defaults; every field is checked
//!    and all failures are reported together.
//! 3. [`commands::clock_in`]: one line is appended, then the file is read back
//!    and must end with exactly that line.
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Clock-in writer and config command
//! - [`params`]: Raw input, defaults, and validated parameters
//! - [`paths`]: Writable file path validation
//! - [`account`]: Account tags
//! - [`config`]: Persisted defaults
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod account;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod params;
pub mod paths;
