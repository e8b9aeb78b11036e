//! # CLI Layer
//!
//! Turns parsed arguments into API calls and results into terminal output.
//!
//! Precedence for every clock-in field: command-line flag, then config file,
//! then the built-in default.

use super::print::{print_config, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use punchclock::api::{ConfigAction, PunchClockApi};
use punchclock::config::{self, PunchClockConfig};
use punchclock::error::Result;
use punchclock::logging::init_logging;
use punchclock::params::{RawInvocation, StandardDefaults};
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: PunchClockApi<StandardDefaults>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::In {
            at,
            delimiter,
            accounts,
        } => handle_in(&ctx, cli.file, at, delimiter, accounts),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config::config_dir(cli.config_dir.clone());
    let config = match &config_dir {
        Some(dir) => PunchClockConfig::load(dir)?,
        None => PunchClockConfig::default(),
    };
    debug!(?config_dir, ?config, "loaded configuration");

    let mut api = PunchClockApi::new(StandardDefaults::from(&config)).with_probe(config.write_probe);
    if let Some(dir) = config_dir {
        api = api.with_config_dir(dir);
    }

    Ok(AppContext { api })
}

fn handle_in(
    ctx: &AppContext,
    file: Option<PathBuf>,
    at: Option<chrono::NaiveDateTime>,
    delimiter: Option<String>,
    accounts: Vec<String>,
) -> Result<()> {
    let raw = RawInvocation {
        file,
        timestamp: at,
        accounts: if accounts.is_empty() {
            None
        } else {
            Some(accounts)
        },
        delimiter,
    };

    let result = ctx.api.clock_in(raw)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
