use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn countries() -> Command {
    let mut cmd = Command::cargo_bin("countries").expect("binary should be built");
    cmd.arg("--log-level").arg("off");
    cmd
}

#[test]
fn show_prints_derived_properties() {
    countries()
        .args(["show", "NZ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: New Zealand"))
        .stdout(predicate::str::contains("alpha3: NZL"))
        .stdout(predicate::str::contains("numeric_padded: 554"))
        .stdout(predicate::str::contains("flag: /static/flags/nz.gif"));
}

#[test]
fn show_unknown_code_fails() {
    countries().args(["show", "ZZ"]).assert().failure().stderr(predicate::str::contains("ZZ"));
}

#[test]
fn ioc_resolves() {
    countries().args(["ioc", "NED"]).assert().success().stdout("NL\tNetherlands\n");
    countries().args(["ioc", "XXX"]).assert().failure();
}

#[test]
fn list_starts_alphabetically() {
    countries()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("AF\tAfghanistan\nAX\tÅland Islands\nAL\tAlbania\n"));
}

#[test]
fn encode_and_decode() {
    countries().args(["encode", "--multiple", "nz,au", "FR"]).assert().success().stdout("NZ,AU,FR\n");
    countries().args(["encode", "NZ"]).assert().success().stdout("NZ\n");
    countries().args(["encode", "NZ", "AU"]).assert().failure();
    countries()
        .args(["decode", "--multiple", "AU,NZ"])
        .assert()
        .success()
        .stdout("AU\tAustralia\nNZ\tNew Zealand\n");
}

#[test]
fn validate_reports_offending_code() {
    countries().args(["validate", "NZ"]).assert().success().stdout("valid\n");
    countries().args(["validate", "--blank", ""]).assert().success();
    countries().args(["validate", ""]).assert().failure().stderr(predicate::str::contains("blank"));
    countries()
        .args(["validate", "--multiple", "AU,:("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("position 1"));
}

#[test]
fn settings_file_is_applied() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("countrykit.toml");
    fs::write(&path, "[countries]\nstatic_url = \"/static-assets/\"\n[countries.overrides]\nNZ = \"Aotearoa\"\n")
        .expect("write settings");

    countries()
        .arg("--config")
        .arg(&path)
        .args(["show", "NZ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Aotearoa"))
        .stdout(predicate::str::contains("flag: /static-assets/flags/nz.gif"));
}

#[test]
fn environment_overrides_lists() {
    countries()
        .env("COUNTRYKIT__COUNTRIES__ONLY", "NZ,AU")
        .arg("list")
        .assert()
        .success()
        .stdout("AU\tAustralia\nNZ\tNew Zealand\n");

    countries()
        .env("COUNTRYKIT__COUNTRIES__FIRST", "NZ")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("NZ\tNew Zealand\n"));

    countries()
        .env("COUNTRYKIT__COUNTRIES__STATIC_URL", "/sa/")
        .env("COUNTRYKIT__COUNTRIES__COMMON_NAMES", "false")
        .args(["show", "NZ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flag: /sa/flags/nz.gif"));
}
