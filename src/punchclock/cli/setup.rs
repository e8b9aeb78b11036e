use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Parser, Debug)]
#[command(name = "punchclock", version)]
#[command(about = "Append clock-in entries to a timeclock log", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Timeclock log to write to (default: log.timeclock)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Directory holding config.json (default: $PUNCHCLOCK_CONFIG_DIR, then the OS config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clock in to one or more accounts
    In {
        /// When to clock in (YYYY-MM-DD HH:MM:SS, default: now)
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<NaiveDateTime>,

        /// Joins accounts on the written line
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Accounts, outermost first (e.g. INBOX meeting)
        accounts: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (file, delimiter, write-probe)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s.trim(), format).ok())
        .ok_or_else(|| format!("'{}' is not a timestamp (expected YYYY-MM-DD HH:MM:SS)", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(parse_timestamp("1970-01-01 12:00:00"), Ok(noon()));
        assert_eq!(parse_timestamp("1970-01-01T12:00:00"), Ok(noon()));
        assert!(parse_timestamp("12:00").is_err());
    }

    #[test]
    fn test_in_with_accounts() {
        let cli = Cli::try_parse_from([
            "punchclock",
            "-f",
            "work.timeclock",
            "in",
            "--at",
            "1970-01-01 12:00:00",
            "INBOX",
            "meeting",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("work.timeclock")));
        match cli.command {
            Commands::In {
                at,
                delimiter,
                accounts,
            } => {
                assert_eq!(at, Some(noon()));
                assert_eq!(delimiter, None);
                assert_eq!(accounts, vec!["INBOX", "meeting"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_in_without_arguments() {
        let cli = Cli::try_parse_from(["punchclock", "in"]).unwrap();
        assert_eq!(cli.file, None);
        assert!(matches!(
            cli.command,
            Commands::In { at: None, delimiter: None, ref accounts } if accounts.is_empty()
        ));
    }

    #[test]
    fn test_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["punchclock", "in", "--file", "x.timeclock"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.timeclock")));
    }

    #[test]
    fn test_config_key_value() {
        let cli = Cli::try_parse_from(["punchclock", "config", "delimiter", "/"]).unwrap();
        match cli.command {
            Commands::Config { key, value } => {
                assert_eq!(key.as_deref(), Some("delimiter"));
                assert_eq!(value.as_deref(), Some("/"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        assert!(Cli::try_parse_from(["punchclock", "in", "--at", "yesterday"]).is_err());
    }
}
