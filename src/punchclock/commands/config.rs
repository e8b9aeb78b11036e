use crate::commands::{CmdMessage, CmdResult};
use crate::config::PunchClockConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PunchClockConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "Set {} = {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::WriteProbe;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(PunchClockConfig::default()));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_set_persists() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("write-probe".into(), "append".into()),
        )
        .unwrap();
        run(
            dir.path(),
            ConfigAction::Set("file".into(), "/tmp/work.timeclock".into()),
        )
        .unwrap();

        let config = PunchClockConfig::load(dir.path()).unwrap();
        assert_eq!(config.write_probe, WriteProbe::Append);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/work.timeclock")));
    }

    #[test]
    fn test_show_key() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("delimiter".into())).unwrap();
        assert_eq!(result.messages, vec![CmdMessage::info("delimiter = :")]);
    }

    #[test]
    fn test_set_invalid_value_does_not_save() {
        let dir = TempDir::new().unwrap();
        let err = run(
            dir.path(),
            ConfigAction::Set("write-probe".into(), "overwrite".into()),
        );
        assert!(err.is_err());
        assert!(!dir.path().join("config.json").exists());
    }
}
