use countrykit::{Country, CountryField, CountryInput, FieldStore, FieldValue, Record, Registry};

fn countries_field() -> CountryField {
    CountryField::builder("countries").multiple(true).build().expect("multi field should build")
}

fn codes(field: &CountryField, record: &Record) -> Vec<String> {
    field
        .get(Some(record))
        .expect("instance given")
        .codes()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

#[test]
fn empty() {
    let field = countries_field();
    let mut record = Record::new();
    assert!(codes(&field, &record).is_empty());

    field.init(&mut record).expect("init");
    assert_eq!(record.raw("countries"), Some(""));
    assert!(field.get(Some(&record)).expect("instance given").is_empty());
}

#[test]
fn single_and_several() {
    let field = countries_field();

    let record = Record::new().with("countries", Some("NZ"));
    let value = field.get(Some(&record)).expect("instance given");
    let countries = value.as_multiple().expect("multi-value field");
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].name(), "New Zealand");

    let record = Record::new().with("countries", Some("AU,NZ"));
    let value = field.get(Some(&record)).expect("instance given");
    assert!(matches!(&value, FieldValue::Multiple(countries) if countries.len() == 2));
    assert!(value.countries().iter().all(|country| !country.name().is_empty()));
}

#[test]
fn set_text() {
    let field = countries_field();
    let mut record = Record::new();
    field.set(&mut record, "NZ,AU").expect("set");
    assert_eq!(codes(&field, &record), ["NZ", "AU"]);
}

#[test]
fn set_list() {
    let field = countries_field();
    let mut record = Record::new();
    field.set(&mut record, vec!["NZ", "AU"]).expect("set");
    assert_eq!(codes(&field, &record), ["NZ", "AU"]);
}

#[test]
fn set_country() {
    let field = countries_field();
    let mut record = Record::new();
    field.set(&mut record, Country::new("NZ")).expect("set");
    assert_eq!(codes(&field, &record), ["NZ"]);
}

#[test]
fn set_countries() {
    let field = countries_field();
    let mut record = Record::new();
    field.set(&mut record, vec![Country::new("NZ"), Country::new("AU")]).expect("set");
    assert_eq!(codes(&field, &record), ["NZ", "AU"]);
}

#[test]
fn set_mixed_keeps_order_and_duplicates() {
    let field = countries_field();
    let mut record = Record::new();
    let mixed: Vec<CountryInput> = vec!["au".into(), Country::new("NZ").into(), "AU".into()];
    field.set(&mut record, mixed).expect("set");
    assert_eq!(record.raw("countries"), Some("AU,NZ,AU"));
}

#[test]
fn set_decoded_value_back() {
    let field = countries_field();
    let source = Record::new().with("countries", Some("fr, de"));
    let value = field.get(Some(&source)).expect("instance given");

    let mut record = Record::new();
    field.set(&mut record, value).expect("set");
    assert_eq!(record.raw("countries"), Some("FR,DE"));
}

#[test]
fn all_countries() {
    let field = countries_field();
    let all_codes: Vec<String> = Registry::global().all_codes().into_iter().map(|(code, _)| code).collect();

    let mut record = Record::new();
    field.set(&mut record, all_codes.clone()).expect("set");
    assert_eq!(codes(&field, &record), all_codes);

    let stored = record.raw("countries").expect("stored");
    assert!(stored.len() <= field.max_length());
}

#[test]
fn contains_lookup() {
    let field = countries_field();
    let records = [
        Record::new().with("countries", Some("AU,NZ")),
        Record::new().with("countries", Some("FR")),
        Record::new().with("countries", None),
    ];
    assert_eq!(field.filter(&records, "nz").len(), 1);
    assert_eq!(field.filter(&records, &Country::new("FR")).len(), 1);
    assert!(field.filter(&records, "Z").is_empty());
}
