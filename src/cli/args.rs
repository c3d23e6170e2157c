//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use dosocs2::constants::{APP_NAME, ENV_CONFIG, ENV_GLOBAL_CONFIG};

/// SPDX document generator and license scanner front end.
#[derive(Parser, Debug)]
#[command(name = APP_NAME, version = dosocs2::constants::VERSION)]
pub struct Cli {
    /// Alternate local config file (default: $XDG_CONFIG_HOME/dosocs2/dosocs2.conf).
    #[arg(short = 'f', long = "config", global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Alternate global config file (default: /etc/dosocs2.conf).
    #[arg(long, global = true, env = ENV_GLOBAL_CONFIG)]
    pub global_config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Write a fresh local config file seeded with the defaults.
    Newconfig(NewconfigArgs),

    /// Print the effective configuration.
    Configtest(ConfigtestArgs),

    /// Print a single effective config value.
    Get(GetArgs),

    /// Show where configuration is read from, in resolution order.
    Paths,
}

/// Arguments for the `newconfig` subcommand.
#[derive(Parser, Debug)]
pub struct NewconfigArgs {
    /// Keep an existing local config file instead of replacing it.
    #[arg(long, default_value_t = false)]
    pub no_overwrite: bool,
}

/// Arguments for the `configtest` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigtestArgs {
    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the `get` subcommand.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Config key to look up (e.g. `connection_uri`).
    pub key: String,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
