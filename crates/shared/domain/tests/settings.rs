use countrykit_domain::settings::{CountriesSettings, LoggingSettings, Settings};
use serde_json::json;

#[test]
fn settings_defaults_are_sane() {
    let countries = CountriesSettings::default();
    assert_eq!(countries.static_url, "/static/");
    assert_eq!(countries.flag_url, "flags/{code}.gif");
    assert!(countries.common_names);
    assert!(countries.overrides.is_empty());
    assert!(countries.first_break.is_none());
    assert_eq!(countries.default_locale, "en");

    let logging = LoggingSettings::default();
    assert_eq!(logging.level, "info");
    assert!(!logging.json);
    assert!(logging.directory.is_none());
}

#[test]
fn settings_deserialize_with_partial_input() {
    let raw = json!({
        "countries": {
            "static_url": "/static-assets/",
            "overrides": { "NZ": "Aotearoa", "AU": null },
            "first": ["NZ"],
            "translations": { "eo": { "AF": "Afganio" } }
        },
        "logging": { "json": true }
    });

    let settings: Settings = serde_json::from_value(raw).expect("settings deserialize");
    assert_eq!(settings.countries.static_url, "/static-assets/");
    assert_eq!(settings.countries.flag_url, "flags/{code}.gif");
    assert_eq!(settings.countries.overrides.get("NZ"), Some(&Some("Aotearoa".to_owned())));
    assert_eq!(settings.countries.overrides.get("AU"), Some(&None));
    assert_eq!(settings.countries.first, vec!["NZ".to_owned()]);
    assert_eq!(settings.countries.translations["eo"]["AF"], "Afganio");
    assert!(settings.logging.json);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn settings_clone_on_write() {
    let original = Settings::default();
    let mut changed = original.clone();
    changed.countries.static_url = "/cdn/".to_owned();

    assert_eq!(original.countries.static_url, "/static/");
    assert_eq!(changed.countries.static_url, "/cdn/");
}
