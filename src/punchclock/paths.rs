//! # Writable File Paths
//!
//! A [`WritableFilePath`] can only be obtained through [`validate`] or
//! [`validate_with`]. Holding one means the path was, at validation time, an
//! existing regular file that this process could open for writing. Nothing
//! re-checks it afterwards: the file may be removed or have its permissions
//! changed before the write happens.
//!
//! ## Checks
//!
//! Run in order, each with its own error kind:
//!
//! 1. The path exists (symlinks are followed) — [`PathError::DoesNotExist`]
//! 2. It is a regular file — [`PathError::NotAFile`]
//! 3. It opens for writing — [`PathError::NotWritable`]
//!
//! ## Write Probes
//!
//! The writability check opens the file and closes it again straight away.
//! [`WriteProbe::Truncate`] is the default and **empties the file**;
//! [`WriteProbe::Append`] opens in append mode and leaves content untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("\"{}\" does not exist", .path.display())]
    DoesNotExist { path: PathBuf },

    #[error("\"{}\" is not a file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("\"{}\" is not writable", .path.display())]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathErrorKind {
    DoesNotExist,
    NotAFile,
    NotWritable,
}

impl PathError {
    pub fn kind(&self) -> PathErrorKind {
        match self {
            PathError::DoesNotExist { .. } => PathErrorKind::DoesNotExist,
            PathError::NotAFile { .. } => PathErrorKind::NotAFile,
            PathError::NotWritable { .. } => PathErrorKind::NotWritable,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            PathError::DoesNotExist { path }
            | PathError::NotAFile { path }
            | PathError::NotWritable { path, .. } => path,
        }
    }
}

/// How the writability check opens the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteProbe {
    /// Open for writing with truncation. Leaves the file empty.
    #[default]
    Truncate,
    /// Open in append mode. Leaves the file as it was.
    Append,
}

impl fmt::Display for WriteProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteProbe::Truncate => write!(f, "truncate"),
            WriteProbe::Append => write!(f, "append"),
        }
    }
}

impl FromStr for WriteProbe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(WriteProbe::Truncate),
            "append" => Ok(WriteProbe::Append),
            other => Err(format!(
                "Unknown write probe '{}' (expected 'truncate' or 'append')",
                other
            )),
        }
    }
}

/// A path that passed every check in [`validate_with`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WritableFilePath(PathBuf);

impl WritableFilePath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for WritableFilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for WritableFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Validates `path` with the default, truncating, write probe.
pub fn validate(path: impl Into<PathBuf>) -> Result<WritableFilePath, PathError> {
    validate_with(path, WriteProbe::default())
}

pub fn validate_with(
    path: impl Into<PathBuf>,
    probe: WriteProbe,
) -> Result<WritableFilePath, PathError> {
    let path = path.into();

    // fs::metadata follows symlinks; any failure to stat counts as missing.
    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(_) => return Err(PathError::DoesNotExist { path }),
    };
    if !metadata.is_file() {
        return Err(PathError::NotAFile { path });
    }

    let mut options = OpenOptions::new();
    match probe {
        WriteProbe::Truncate => options.write(true).truncate(true),
        WriteProbe::Append => options.append(true),
    };
    if let Err(source) = options.open(&path) {
        return Err(PathError::NotWritable { path, source });
    }

    debug!(path = %path.display(), %probe, "validated writable file");
    Ok(WritableFilePath(path))
}
