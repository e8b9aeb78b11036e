//! # API Facade
//!
//! The single entry point for punchclock operations, whatever the UI.
//!
//! The facade assembles user input into validated parameters and dispatches
//! to the command layer. It returns structured `CmdResult` values and never
//! prints, exits, or assumes a terminal.
//!
//! `PunchClockApi<D: Defaults>` is generic over the defaults provider so tests
//! can pin the clock and the default log file.

use crate::commands;
use crate::error::{PunchClockError, Result};
use crate::params::{self, Defaults, RawInvocation};
use crate::paths::WriteProbe;
use std::path::PathBuf;
use tracing::debug;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct PunchClockApi<D: Defaults> {
    defaults: D,
    probe: WriteProbe,
    config_dir: Option<PathBuf>,
}

impl<D: Defaults> PunchClockApi<D> {
    pub fn new(defaults: D) -> Self {
        Self {
            defaults,
            probe: WriteProbe::default(),
            config_dir: None,
        }
    }

    pub fn with_probe(mut self, probe: WriteProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(config_dir.into());
        self
    }

    /// Validates `raw`, fills in defaults, and appends one clock-in line.
    pub fn clock_in(&self, raw: RawInvocation) -> Result<CmdResult> {
        debug!(?raw, probe = %self.probe, "clock in");
        let params = params::assemble_with(raw, &self.defaults, self.probe)?;
        commands::clock_in::run(&params)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        let dir = self.config_dir.as_ref().ok_or_else(|| {
            PunchClockError::Api("No configuration directory available".to_string())
        })?;
        commands::config::run(dir, action)
    }
}
