use countrykit::{CountriesSettings, Country, CountryAttr, Registry};
use std::collections::HashSet;
use std::sync::Arc;

fn registry(static_url: &str, flag_url: &str) -> Arc<Registry> {
    let settings = CountriesSettings {
        static_url: static_url.to_owned(),
        flag_url: flag_url.to_owned(),
        ..CountriesSettings::default()
    };
    Arc::new(Registry::new(&settings))
}

#[test]
fn empty_country_degrades() {
    let empty = Country::new("");
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.name(), "");
    assert_eq!(empty.flag(), "");
    assert_eq!(empty.alpha3(), "");
    assert_eq!(empty.ioc_code(), "");
    assert_eq!(empty.numeric(), None);
    assert_eq!(empty.numeric_padded(), None);
}

#[test]
fn flag_url_settings() {
    let relative = registry("/static-assets/", "img/flag-{code_upper}.png");
    assert_eq!(relative.country("NZ").flag(), "/static-assets/img/flag-NZ.png");

    let absolute = registry("/static-assets/", "https://flags.example.com/{code_upper}.PNG");
    assert_eq!(absolute.country("NZ").flag(), "https://flags.example.com/NZ.PNG");
}

#[test]
fn empty_flag_url_disables_flags() {
    assert_eq!(Country::new("XX").with_flag_url("").flag(), "");
    assert_eq!(Country::new("").with_flag_url("").flag(), "");
}

#[test]
fn equality_ignores_case() {
    let nz = Country::new("NZ");
    assert_eq!(nz, "nz");
    assert_eq!(nz, "NZ");
    assert_eq!(nz, "Nz".to_owned());
    assert_eq!("nz", nz);
    assert_eq!(nz, Country::new("nz").with_flag_url(""));
    assert_ne!(nz, Country::new("AU"));
}

#[test]
fn country_and_code_are_interchangeable_keys() {
    let mut seen = HashSet::new();
    seen.insert(Country::new("nz"));
    assert!(seen.contains("NZ"));
    assert!(!seen.insert(Country::new("NZ")));
}

#[test]
fn str_attr() {
    assert_eq!(format!("{}", Country::new("NZ")), "NZ");
    assert_eq!(format!("{}", Country::new("NZ").with_str_attr(CountryAttr::Name)), "New Zealand");
    assert_eq!(Country::new("AL").with_str_attr(CountryAttr::NumericPadded).to_string(), "008");
}

#[test]
fn debug_repr() {
    assert_eq!(format!("{:?}", Country::new("XX")), "Country(code=\"XX\")");
    assert_eq!(
        format!("{:?}", Country::new("XX").with_flag_url("").with_str_attr(CountryAttr::Name)),
        "Country(code=\"XX\", flag_url=\"\", str_attr=\"name\")"
    );
}

#[test]
fn iso_codes() {
    assert_eq!(Country::new("NL").ioc_code(), "NED");
    assert_eq!(Country::new("BN").alpha3(), "BRN");
    assert_eq!(Country::new("XX").alpha3(), "");
    assert_eq!(Country::new("BN").numeric(), Some(96));
    assert_eq!(Country::new("XX").numeric(), None);
    assert_eq!(Country::new("AL").numeric_padded().as_deref(), Some("008"));
    assert_eq!(Country::new("BN").numeric_padded().as_deref(), Some("096"));
    assert_eq!(Country::new("NZ").numeric_padded().as_deref(), Some("554"));
    assert_eq!(Country::new("XX").numeric_padded(), None);
}

#[test]
fn country_from_ioc() {
    let nl = Country::from_ioc("NED").expect("NED is the Netherlands");
    assert_eq!(nl, Country::new("NL").with_flag_url(""));
    assert!(Country::from_ioc("").is_none());
    assert!(Country::from_ioc("XXX").is_none());
}

#[test]
fn unicode_flags() {
    assert_eq!(Country::new("AU").unicode_flag(), "🇦🇺");
    assert_eq!(Country::new("DE").unicode_flag(), "🇩🇪");
}
