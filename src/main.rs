//! dosocs2 — configuration front end.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use dosocs2::config;

use std::io::Write;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;

use cli::args::{Cli, Command, ConfigtestArgs, GetArgs, NewconfigArgs, OutputFormat};
use config::ConfigStore;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let store = ConfigStore::new(cli.global_config, cli.config)
        .context("failed to load configuration")?;

    match cli.command {
        Command::Newconfig(args) => run_newconfig(&store, args),
        Command::Configtest(args) => run_configtest(&store, args),
        Command::Get(args) => run_get(&store, args),
        Command::Paths => run_paths(&store),
    }
}

/// Write the default template to the local config path.
fn run_newconfig(store: &ConfigStore, args: NewconfigArgs) -> Result<()> {
    let written = store
        .create_local_config(!args.no_overwrite)
        .context("failed to create local config")?;

    let path = store.local_path().display();
    if written {
        println!("{} wrote {}", "✔".green().bold(), path);
    } else {
        println!("{} kept existing {}", "·".dimmed(), path);
    }
    Ok(())
}

/// Print the effective configuration.
fn run_configtest(store: &ConfigStore, args: ConfigtestArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match args.format {
        OutputFormat::Text => {
            store
                .dump_to_file(&mut handle)
                .context("failed to print configuration")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, store)
                .context("failed to serialize configuration")?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

/// Print one value.
fn run_get(store: &ConfigStore, args: GetArgs) -> Result<()> {
    match store.get(&args.key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!("unknown config key '{}'", args.key),
    }
}

/// Print the config home and each config file, lowest precedence first.
fn run_paths(store: &ConfigStore) -> Result<()> {
    match store.config_home() {
        Some(home) => println!("{}  {}", "home:".cyan(), home.display()),
        None => println!("{}  {}", "home:".cyan(), "unknown".dimmed()),
    }

    let labels = ["global:", "local: "];
    for (label, path) in labels.iter().zip(store.resolution_order()) {
        let status = if path.is_file() {
            "found".green()
        } else {
            "missing".dimmed()
        };
        println!("{}  {}  ({})", label.cyan(), path.display(), status);
    }
    Ok(())
}
