//! Clipsheet CLI — Command-line interface for checking and exporting clip settings.
//!
//! Usage:
//!   clipsheet template               Print a default clip as JSON
//!   clipsheet validate <FILE>        List validation issues
//!   clipsheet preview <FILE>         Show normalized preview geometry
//!   clipsheet export <FILE>          Print the sheet export block
//!   clipsheet info <FILE>            Show clip summary
//!
//! `<FILE>` is a clip JSON snapshot, or `-` for stdin. Every command that
//! reads a clip accepts `--set field=value` edits, applied in order.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use clipsheet_clip_model::edit::FieldEdit;
use clipsheet_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "clipsheet",
    about = "Validate, preview, and export single-clip render settings",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/clipsheet/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default clip as JSON
    Template,

    /// Validate a clip
    Validate {
        /// Clip JSON file, or `-` for stdin
        file: PathBuf,

        /// Field edit to apply before validating (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        edits: Vec<FieldEdit>,

        /// Exit with an error when the clip has violations
        #[arg(long)]
        strict: bool,
    },

    /// Show crop, mask, and text geometry on a target surface
    Preview {
        /// Clip JSON file, or `-` for stdin
        file: PathBuf,

        /// Field edit to apply first (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        edits: Vec<FieldEdit>,

        /// Surface width (defaults to the configured preview width)
        #[arg(long)]
        width: Option<f64>,

        /// Surface height (defaults to the configured preview height)
        #[arg(long)]
        height: Option<f64>,

        /// Use the clip profile's output dimensions as the surface
        #[arg(long, conflicts_with_all = ["width", "height"])]
        profile_surface: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the sheet export block
    Export {
        /// Clip JSON file, or `-` for stdin
        file: PathBuf,

        /// Field edit to apply first (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        edits: Vec<FieldEdit>,

        /// Print ordered key/value pairs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show clip information
    Info {
        /// Clip JSON file, or `-` for stdin
        file: PathBuf,

        /// Field edit to apply first (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        edits: Vec<FieldEdit>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (app_config, fallback) = match &cli.config {
        Some(path) => {
            let config = AppConfig::load_from(path)
                .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?;
            (config, None)
        }
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = app_config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    clipsheet_common::logging::init_logging(&logging);

    if let Some(e) = fallback {
        tracing::warn!("Using default config: {e}");
    }

    match cli.command {
        Commands::Template => commands::template::run(),
        Commands::Validate {
            file,
            edits,
            strict,
        } => commands::validate::run(file, edits, strict),
        Commands::Preview {
            file,
            edits,
            width,
            height,
            profile_surface,
            json,
        } => commands::preview::run(
            file,
            edits,
            &app_config.preview,
            width,
            height,
            profile_surface,
            json,
        ),
        Commands::Export { file, edits, json } => commands::export::run(file, edits, json),
        Commands::Info { file, edits } => commands::info::run(file, edits),
    }
}
