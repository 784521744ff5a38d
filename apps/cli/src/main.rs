#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod handlers;
pub mod models;

use crate::handlers::{field, lookup};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context, Result};
use clap::Parser;
use countrykit::{Registry, load_settings};
use countrykit_logger::Logger;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    let _logger = Logger::from_settings(env!("CARGO_BIN_NAME"), &settings.logging)?;

    let registry = Arc::new(Registry::new(&settings.countries));

    match cli.command {
        AppCommands::Show { code, locale } => lookup::show(&registry, &code, locale.as_deref())?,
        AppCommands::Ioc { ioc } => lookup::ioc(&registry, &ioc)?,
        AppCommands::List { locale } => lookup::list(&registry, locale.as_deref()),
        AppCommands::Encode { field: args, values } => field::encode(&registry, args, values)?,
        AppCommands::Decode { field: args, raw } => field::decode(&registry, args, &raw)?,
        AppCommands::Validate { field: args, blank, raw } => {
            field::validate(&registry, args, blank, &raw)?;
        },
    }

    Ok(())
}
