use countrykit::translation::{self, Locale};
use countrykit::{CountriesSettings, CountryField, Registry};
use std::collections::BTreeMap;
use std::sync::Arc;

fn esperanto_registry() -> Arc<Registry> {
    let mut eo = BTreeMap::new();
    eo.insert("AF".to_owned(), "Afganio".to_owned());
    eo.insert("NZ".to_owned(), "Nov-Zelando".to_owned());

    let mut settings = CountriesSettings::default();
    settings.translations.insert("eo".to_owned(), eo);
    Arc::new(Registry::new(&settings))
}

fn pair(code: &str, name: &str) -> (String, String) {
    (code.to_owned(), name.to_owned())
}

#[test]
fn translated_choices() {
    let registry = esperanto_registry();
    let field = CountryField::builder("country").registry(Arc::clone(&registry)).build().expect("field");

    {
        let _eo = translation::activate("eo");
        assert_eq!(registry.all_codes()[0].1, "Afganio");
        assert_eq!(field.form_choices()[1].1, "Afganio");
        assert_eq!(field.codec().wrap("NZ").name(), "Nov-Zelando");
    }

    assert_eq!(field.form_choices()[1].1, "Afghanistan");
    assert_eq!(field.codec().wrap("NZ").name(), "New Zealand");
}

#[test]
fn ordering_follows_the_active_locale() {
    let mut eo = BTreeMap::new();
    eo.insert("NZ".to_owned(), "Aaa".to_owned());
    let mut settings = CountriesSettings::default();
    settings.translations.insert("eo".to_owned(), eo);
    let registry = Registry::new(&settings);

    assert_eq!(registry.all_codes()[0], pair("AF", "Afghanistan"));
    {
        let _eo = translation::activate("eo");
        assert_eq!(registry.all_codes()[0], pair("NZ", "Aaa"));
        assert_eq!(registry.all_codes()[1].0, "AF");
    }
    assert_eq!(registry.all_codes()[0], pair("AF", "Afghanistan"));
    assert_eq!(registry.all_codes_in(&Locale::new("eo"))[0].0, "NZ");
}

#[test]
fn explicit_locale_ignores_the_active_one() {
    let registry = esperanto_registry();
    let field = CountryField::builder("country").registry(registry).build().expect("field");

    let _de = translation::activate("de");
    assert_eq!(field.choices_in(&Locale::new("eo"))[0].1, "Afganio");
    assert_eq!(field.choices()[0].1, "Afghanistan");
}

#[test]
fn blank_choice() {
    let field = CountryField::builder("country").build().expect("field");
    assert_eq!(field.form_choices()[0], pair("", "---------"));
}

#[test]
fn no_blank_choice() {
    let field = CountryField::builder("favourite_country").default("NZ").build().expect("field");
    assert_eq!(field.form_choices()[0], pair("AF", "Afghanistan"));
}

#[test]
fn blank_choice_label() {
    let field = CountryField::builder("country")
        .null(true)
        .blank(true)
        .blank_label("(select country)")
        .build()
        .expect("field");
    assert_eq!(field.form_choices()[0], pair("", "(select country)"));
}

#[test]
fn multiple_has_no_blank_choice() {
    let field = CountryField::builder("countries").multiple(true).blank(true).build().expect("field");
    assert_eq!(field.form_choices()[0], pair("AF", "Afghanistan"));
}

#[test]
fn first_countries_are_pinned() {
    let settings = CountriesSettings {
        first: vec!["NZ".to_owned(), "AU".to_owned()],
        first_break: Some("------".to_owned()),
        ..CountriesSettings::default()
    };
    let registry = Registry::new(&settings);
    let codes = registry.all_codes_in(&Locale::fallback());

    assert_eq!(codes[0], pair("NZ", "New Zealand"));
    assert_eq!(codes[1], pair("AU", "Australia"));
    assert_eq!(codes[2], pair("", "------"));
    assert_eq!(codes[3], pair("AF", "Afghanistan"));
    assert_eq!(codes.iter().filter(|(code, _)| code == "NZ").count(), 1);
}

#[test]
fn first_countries_sorted_and_repeated() {
    let settings = CountriesSettings {
        first: vec!["NZ".to_owned(), "AU".to_owned()],
        first_sort: true,
        first_repeat: true,
        ..CountriesSettings::default()
    };
    let registry = Registry::new(&settings);
    let codes = registry.all_codes_in(&Locale::fallback());

    assert_eq!(codes[0], pair("AU", "Australia"));
    assert_eq!(codes[1], pair("NZ", "New Zealand"));
    assert_eq!(codes[2], pair("AF", "Afghanistan"));
    assert_eq!(codes.iter().filter(|(code, _)| code == "NZ").count(), 2);
}

#[test]
fn overrides_and_only() {
    let mut overrides = BTreeMap::new();
    overrides.insert("NZ".to_owned(), Some("Aotearoa".to_owned()));
    overrides.insert("AU".to_owned(), None);
    overrides.insert("XK".to_owned(), Some("Kosovo".to_owned()));
    let settings = CountriesSettings {
        overrides,
        only: vec!["NZ".to_owned(), "AU".to_owned(), "XK".to_owned(), "FR".to_owned()],
        ..CountriesSettings::default()
    };
    let registry = Registry::new(&settings);

    assert_eq!(
        registry.all_codes_in(&Locale::fallback()),
        [pair("NZ", "Aotearoa"), pair("FR", "France"), pair("XK", "Kosovo")]
    );
    assert!(!registry.contains("AU"));
    assert_eq!(registry.name("AU"), "");
}
