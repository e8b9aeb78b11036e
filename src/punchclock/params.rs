//! # Invocation Parameters
//!
//! A UI client fills in a [`RawInvocation`] with whatever the user supplied.
//! Every field is optional; [`assemble`] resolves missing ones through a
//! [`Defaults`] provider, validates what needs validating, and produces an
//! immutable [`InvocationParams`].
//!
//! Assembly never stops at the first bad field. All fields are visited and
//! every failure is reported together in [`FieldErrors`].

use crate::account::{into_accounts, Account};
use crate::config::PunchClockConfig;
use crate::error::{FieldError, FieldErrors};
use crate::paths::{self, WritableFilePath, WriteProbe};
use chrono::{Local, NaiveDateTime, Timelike};
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_FILE: &str = "log.timeclock";
pub const DEFAULT_DELIMITER: &str = ":";

/// User input before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInvocation {
    pub file: Option<PathBuf>,
    pub timestamp: Option<NaiveDateTime>,
    pub accounts: Option<Vec<String>>,
    pub delimiter: Option<String>,
}

/// Supplies a value for each field the user left out.
pub trait Defaults {
    fn file(&self) -> PathBuf;
    fn timestamp(&self) -> NaiveDateTime;
    fn accounts(&self) -> Vec<Account>;
    fn delimiter(&self) -> String;
}

/// Built-in defaults, optionally overridden by persisted configuration.
///
/// The timestamp is read from the local clock at the moment it is asked for.
#[derive(Debug, Clone)]
pub struct StandardDefaults {
    file: PathBuf,
    delimiter: String,
}

impl Default for StandardDefaults {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl From<&PunchClockConfig> for StandardDefaults {
    fn from(config: &PunchClockConfig) -> Self {
        Self {
            file: config
                .file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE)),
            delimiter: config.delimiter.clone(),
        }
    }
}

impl Defaults for StandardDefaults {
    fn file(&self) -> PathBuf {
        self.file.clone()
    }

    fn timestamp(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }

    fn accounts(&self) -> Vec<Account> {
        Vec::new()
    }

    fn delimiter(&self) -> String {
        self.delimiter.clone()
    }
}

/// Everything one clock-in needs. Built once by [`assemble`], never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationParams {
    path: WritableFilePath,
    timestamp: NaiveDateTime,
    accounts: Vec<Account>,
    delimiter: String,
}

impl InvocationParams {
    pub fn new(
        path: WritableFilePath,
        timestamp: NaiveDateTime,
        accounts: Vec<Account>,
        delimiter: impl Into<String>,
    ) -> Self {
        Self {
            path,
            timestamp,
            accounts,
            delimiter: delimiter.into(),
        }
    }

    pub fn path(&self) -> &WritableFilePath {
        &self.path
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

/// Assembles parameters, validating the file with the truncating probe.
pub fn assemble<D: Defaults + ?Sized>(
    raw: RawInvocation,
    defaults: &D,
) -> Result<InvocationParams, FieldErrors> {
    assemble_with(raw, defaults, WriteProbe::default())
}

pub fn assemble_with<D: Defaults + ?Sized>(
    raw: RawInvocation,
    defaults: &D,
    probe: WriteProbe,
) -> Result<InvocationParams, FieldErrors> {
    let file = raw.file.unwrap_or_else(|| defaults.file());
    let path = paths::validate_with(file, probe).map_err(|e| {
        debug!(error = %e, "file field rejected");
        FieldError::from(e)
    });

    let timestamp = raw.timestamp.unwrap_or_else(|| defaults.timestamp());
    let accounts = match raw.accounts {
        Some(names) => into_accounts(names),
        None => defaults.accounts(),
    };
    let delimiter = raw.delimiter.unwrap_or_else(|| defaults.delimiter());

    // Only the file field is validated.
    match path {
        Ok(path) => Ok(InvocationParams {
            path,
            timestamp,
            accounts,
            delimiter,
        }),
        Err(error) => Err(FieldErrors::new(error, Vec::new())),
    }
}
