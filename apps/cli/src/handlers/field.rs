use crate::models::args::FieldArgs;
use anyhow::{Context, Result};
use countrykit::{CountryField, Registry};
use std::sync::Arc;
use tracing::debug;

fn build_field(registry: &Arc<Registry>, args: FieldArgs, blank: bool) -> Result<CountryField> {
    CountryField::builder(if args.multiple { "countries" } else { "country" })
        .registry(Arc::clone(registry))
        .multiple(args.multiple)
        .blank(blank)
        .build()
        .context("Failed to configure the country field")
}

/// Prints the stored form of `values`.
///
/// # Errors
/// Returns an error when a single-value field is given several values.
pub fn encode(registry: &Arc<Registry>, args: FieldArgs, values: Vec<String>) -> Result<()> {
    let field = build_field(registry, args, true)?;
    let raw = match values.len() {
        0 => field.to_raw(None::<&str>)?,
        _ => field.to_raw(values)?,
    };
    println!("{}", raw.as_deref().unwrap_or("NULL"));
    Ok(())
}

/// Prints each decoded country as `code<TAB>name`.
///
/// # Errors
/// Returns an error when the field cannot be configured.
pub fn decode(registry: &Arc<Registry>, args: FieldArgs, raw: &str) -> Result<()> {
    let field = build_field(registry, args, true)?;
    let value = field.from_raw(Some(raw));
    debug!(count = value.countries().len(), "Decoded stored value");
    for country in value.countries() {
        println!("{}\t{}", country.code(), country.name());
    }
    Ok(())
}

/// Prints `valid`, or fails with the validation error.
///
/// # Errors
/// Returns the first validation failure.
pub fn validate(registry: &Arc<Registry>, args: FieldArgs, blank: bool, raw: &str) -> Result<()> {
    let field = build_field(registry, args, blank)?;
    field.validate_raw(Some(raw))?;
    println!("valid");
    Ok(())
}
