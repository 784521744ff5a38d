use anyhow::{Result, bail};
use countrykit::{CountryAttr, Locale, Registry};
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Prints every derived property of `code`, one `attr: value` per line.
///
/// # Errors
/// Returns an error when the code is unknown to the registry.
pub fn show(registry: &Arc<Registry>, code: &str, locale: Option<&str>) -> Result<()> {
    let country = registry.country(code);
    let name = locale.map_or_else(|| country.name(), |locale| country.name_in(&Locale::new(locale)));
    if name.is_empty() {
        bail!("Unknown country code '{code}'");
    }

    for attr in CountryAttr::iter() {
        let value = if attr == CountryAttr::Name { name.clone() } else { country.attr(attr) };
        println!("{attr}: {value}");
    }
    Ok(())
}

/// Prints the country an IOC code belongs to.
///
/// # Errors
/// Returns an error when the IOC code does not resolve.
pub fn ioc(registry: &Arc<Registry>, ioc: &str) -> Result<()> {
    let Some(country) = registry.country_from_ioc(ioc) else {
        bail!("Unknown IOC code '{ioc}'");
    };
    println!("{}\t{}", country.code(), country.name());
    Ok(())
}

/// Prints all available `(code, name)` pairs.
pub fn list(registry: &Registry, locale: Option<&str>) {
    let codes = locale.map_or_else(|| registry.all_codes(), |locale| registry.all_codes_in(&Locale::new(locale)));
    for (code, name) in codes {
        println!("{code}\t{name}");
    }
}
