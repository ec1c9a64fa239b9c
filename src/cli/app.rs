//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::output::{Output, OutputFormat};
use super::{agenda, backfill};
use crate::storage::Config;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "AGENDA_LOG";

#[derive(Parser)]
#[command(name = "agenda")]
#[command(author, version, about = "Group meeting agendas and generate agenda documents")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Use this config file instead of searching for agenda.toml
    #[arg(long, global = true, env = "AGENDA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the grouped agenda and its total time
    Group {
        /// Agenda file (.json, .yaml, .yml)
        file: PathBuf,
    },

    /// Generate the agenda document for a meeting
    Generate {
        /// Agenda file (.json, .yaml, .yml)
        file: PathBuf,

        /// Write the document here instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Parse an agenda document into render blocks
    Render {
        /// Agenda document in the agenda dialect
        file: PathBuf,

        /// Render styled HTML instead of a block listing
        #[arg(long)]
        html: bool,
    },

    /// Regenerate cached documents for every agenda file in a directory
    Backfill {
        /// Directory containing agenda files
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Preview without writing any files
        #[arg(long)]
        dry_run: bool,
    },
}

/// Installs the tracing subscriber for library diagnostics
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose("Agenda CLI starting");
    if let Some(path) = &config.local_path {
        output.verbose_ctx("config", &format!("Using config: {}", path.display()));
    }

    match cli.command {
        Commands::Group { file } => {
            output.verbose_ctx("group", &format!("Grouping agenda: {}", file.display()));
            agenda::group(&output, &file)?
        }

        Commands::Generate { file, out } => {
            output.verbose_ctx("generate", &format!("Generating document for: {}", file.display()));
            agenda::generate(&output, &file, out.as_deref())?
        }

        Commands::Render { file, html } => {
            output.verbose_ctx("render", &format!("Rendering: {}, html={}", file.display(), html));
            agenda::render(&output, &config, &file, html)?
        }

        Commands::Backfill { dir, dry_run } => {
            output.verbose_ctx("backfill", &format!("Backfilling {} (dry_run={})", dir.display(), dry_run));
            backfill::run(&output, &config, &dir, dry_run)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
