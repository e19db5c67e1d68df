//! `kemba` command line tool.
//!
//! # Commands
//! - `check <TAG>...`: report whether tags are enabled and their colors
//! - `pipe <TAG>`: log stdin line by line under a tag
//! - `palette`: print every palette entry in its own color
//!
//! Configuration comes from `DEBUG` / `KEMBA` / `NOCOLOR` unless `--config`
//! points at a TOML file.

use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kemba::color::palette::{palette_index, PALETTE};
use kemba::config::{load_config, validate_allow_list, ConfigSource, LoggerConfig};
use kemba::observability::init_logging;
use kemba::{is_enabled, Color256, Kemba, StderrSink};

#[derive(Parser)]
#[command(name = "kemba")]
#[command(about = "Inspect and drive tag-filtered kemba loggers", long_about = None)]
struct Cli {
    /// TOML file with `allowed` and `no_color`; replaces the environment.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable color output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether tags are enabled under the current allow-list
    Check {
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Log each stdin line through a logger for TAG
    Pipe { tag: String },
    /// Print the color palette
    Palette,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::from_env(),
    };
    if cli.no_color {
        config.no_color = true;
    }

    if let Err(errors) = validate_allow_list(&config.allowed) {
        for err in errors {
            tracing::warn!("{}", err);
        }
    }

    match cli.command {
        Commands::Check { tags } => check(&config, &tags),
        Commands::Pipe { tag } => pipe(config, tag)?,
        Commands::Palette => palette(&config),
    }

    Ok(())
}

/// Color report output only when it goes to a terminal.
fn stdout_color(config: &LoggerConfig) -> bool {
    !config.no_color && std::io::stdout().is_terminal()
}

fn check(config: &LoggerConfig, tags: &[String]) {
    if config.is_empty() {
        println!("allow-list is empty, every tag is disabled");
    } else {
        println!("allow-list: {}", config.allowed);
    }

    for tag in tags {
        let enabled = !config.is_empty() && is_enabled(tag, &config.allowed);
        let index = palette_index(tag);
        let color = Color256::new(PALETTE[index]);
        let shown = if stdout_color(config) {
            color.wrap(tag)
        } else {
            tag.clone()
        };
        println!(
            "{shown}\t{}\tcolor {} (palette #{index})",
            if enabled { "enabled" } else { "disabled" },
            color.index()
        );
    }
}

fn pipe(config: LoggerConfig, tag: String) -> std::io::Result<()> {
    let k = Kemba::with_source(tag, ConfigSource::Fixed(config), std::sync::Arc::new(StderrSink));
    if !k.is_enabled() {
        tracing::info!(tag = %k.tag(), "Tag not enabled, input will be discarded");
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        k.printf(format_args!("{line}"));
    }
    Ok(())
}

fn palette(config: &LoggerConfig) {
    for (i, index) in PALETTE.iter().enumerate() {
        let label = format!("#{i:02} {index:3}");
        if stdout_color(config) {
            println!("{}", Color256::new(*index).wrap(label));
        } else {
            println!("{label}");
        }
    }
}
