//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "countries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Country lookups and country field codec checks")]
pub struct Cli {
    /// Settings file (TOML, JSON, YAML, ...); defaults to an optional `countrykit.*`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (error, warn, info, debug, trace, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Show every derived property of a country code
    Show {
        code: String,
        /// Locale of the displayed name (e.g. 'eo', 'pt-br')
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Resolve an IOC code to a country
    Ioc { ioc: String },
    /// List all available (code, name) pairs in display order
    List {
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Encode values into their stored form
    Encode {
        #[command(flatten)]
        field: FieldArgs,
        /// Codes or comma-joined code lists
        values: Vec<String>,
    },
    /// Decode a stored value
    Decode {
        #[command(flatten)]
        field: FieldArgs,
        raw: String,
    },
    /// Validate a stored value
    Validate {
        #[command(flatten)]
        field: FieldArgs,
        /// Accept an empty value
        #[arg(long)]
        blank: bool,
        raw: String,
    },
}

/// Field shape shared by the codec commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct FieldArgs {
    /// Treat the value as a comma-joined multi-value column
    #[arg(short, long)]
    pub multiple: bool,
}
