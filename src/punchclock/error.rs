use crate::paths::PathError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A validation failure attributed to one invocation field.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error(transparent)]
    File(#[from] PathError),
}

impl FieldError {
    /// Name of the field the failure belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::File(_) => "file",
        }
    }
}

/// Every field failure collected while assembling one invocation. Never empty.
#[derive(Debug)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new(first: FieldError, rest: Vec<FieldError>) -> Self {
        let mut errors = Vec::with_capacity(rest.len() + 1);
        errors.push(first);
        errors.extend(rest);
        Self(errors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.len();
        write!(
            f,
            "{} invalid field{}",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for error in &self.0 {
            write!(f, "\n  - {}: {}", error.field(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[derive(Error, Debug)]
pub enum PunchClockError {
    #[error("Invalid invocation: {0}")]
    Invalid(#[from] FieldErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(
        "Post-write check failed for \"{}\": expected last line {:?}, found {:?} ({} lines)",
        .path.display(),
        .expected,
        .found,
        .lines
    )]
    PostWriteInvariant {
        path: PathBuf,
        expected: String,
        found: Option<String>,
        lines: usize,
    },

    #[error("Api Error: {0}")]
    Api(String),
}

impl PunchClockError {
    /// Process exit status a command-line client should report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PunchClockError::Io(_) | PunchClockError::Config(_) | PunchClockError::Api(_) => 1,
            PunchClockError::Invalid(_) => 2,
            PunchClockError::PostWriteInvariant { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PunchClockError>;
