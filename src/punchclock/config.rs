use crate::error::{PunchClockError, Result};
use crate::params::DEFAULT_DELIMITER;
use crate::paths::WriteProbe;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "PUNCHCLOCK_CONFIG_DIR";

/// Persisted defaults, stored as `config.json` in the configuration directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PunchClockConfig {
    /// Log file used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Joins multiple accounts on one line
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// How the log file is opened to check it is writable
    #[serde(default)]
    pub write_probe: WriteProbe,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for PunchClockConfig {
    fn default() -> Self {
        Self {
            file: None,
            delimiter: default_delimiter(),
            write_probe: WriteProbe::default(),
        }
    }
}

impl PunchClockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PunchClockConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "file" => Ok(self
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "delimiter" => Ok(self.delimiter.clone()),
            "write-probe" => Ok(self.write_probe.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file" => {
                self.file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "delimiter" => {
                if value.is_empty() {
                    return Err(PunchClockError::Api("Delimiter cannot be empty".into()));
                }
                self.delimiter = value.to_string();
            }
            "write-probe" => {
                self.write_probe = value.parse().map_err(PunchClockError::Api)?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// `(key, value)` pairs for every setting, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }
}

pub const KEYS: &[&str] = &["file", "delimiter", "write-probe"];

fn unknown_key(key: &str) -> PunchClockError {
    PunchClockError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

/// Resolves the configuration directory: explicit override, then
/// `PUNCHCLOCK_CONFIG_DIR`, then the platform config directory.
pub fn config_dir(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    override_dir
        .or_else(|| std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "punchclock", "punchclock")
                .map(|dirs| dirs.config_dir().to_path_buf())
        })
}
