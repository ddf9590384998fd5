use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn jarbundle() -> Command {
    Command::cargo_bin("kodegen_bundler_jarbundle").unwrap()
}

#[test]
fn test_plist_prints_document() {
    jarbundle()
        .arg("plist")
        .arg(fixture("bar_project.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\""))
        .stdout(predicate::str::contains("<string>org.bar.Main</string>"));
}

#[test]
fn test_plist_reports_filtered_properties_on_stderr() {
    jarbundle()
        .arg("plist")
        .arg(fixture("bar_project.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("com.apple.hwaccel").not())
        .stderr(predicate::str::contains("Deprecated as of 1.4: com.apple.hwaccel"));
}

#[test]
fn test_write_creates_metadata() {
    let dir = tempfile::tempdir().unwrap();

    jarbundle()
        .arg("write")
        .arg(fixture("bar_project.toml"))
        .arg("--contents-dir")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("Info.plist").is_file());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("PkgInfo")).unwrap(),
        "APPL????\n"
    );
    assert!(dir.path().join("Resources/German.lproj/InfoPlist.strings").is_file());
}

#[test]
fn test_check_json_reports_notices() {
    jarbundle()
        .arg("check")
        .arg(fixture("bar_project.toml"))
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"))
        .stdout(predicate::str::contains("\"kind\": \"deprecated_property\""));
}

#[test]
fn test_check_invalid_descriptor_fails() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = dir.path().join("bundle.toml");
    std::fs::write(&descriptor, "name = \"Bar\"\n").unwrap();

    jarbundle()
        .arg("check")
        .arg(&descriptor)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("mainclass"));
}

#[test]
fn test_check_invalid_descriptor_json() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = dir.path().join("bundle.toml");
    std::fs::write(&descriptor, "name = \"Bar\"\ncontentsize = \"wide\"\nmainclass = \"x.Y\"\n").unwrap();

    jarbundle()
        .arg("check")
        .arg(&descriptor)
        .arg("--json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"valid\": false"));
}

#[test]
fn test_missing_descriptor() {
    jarbundle()
        .arg("plist")
        .arg("/nonexistent/bundle.toml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read descriptor"));
}

#[test]
fn test_write_show_plist_echoes_document() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = dir.path().join("bundle.toml");
    std::fs::write(
        &descriptor,
        "name = \"Bar\"\nmainclass = \"org.bar.Main\"\nstartonmainthread = true\n",
    )
    .unwrap();
    let contents = dir.path().join("Contents");
    std::fs::create_dir(&contents).unwrap();

    jarbundle()
        .arg("write")
        .arg(&descriptor)
        .arg("--contents-dir")
        .arg(&contents)
        .arg("--show-plist")
        .assert()
        .success()
        .stdout(predicate::str::contains("<key>MainClass</key>"))
        .stdout(predicate::str::contains("<key>StartOnMainThread</key>"));

    let plist = plist::Value::from_file(contents.join("Info.plist")).unwrap();
    let java = plist
        .as_dictionary()
        .and_then(|root| root.get("Java"))
        .and_then(plist::Value::as_dictionary)
        .unwrap();
    assert_eq!(java.get("StartOnMainThread"), Some(&plist::Value::Boolean(true)));
}
