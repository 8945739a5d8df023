// tests/cli/smoke_tests.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{
    BUILD_KEY, RELEASE_KEY, assert_untouched, bundle_dict, is_binary, read_dict, write_binary, write_xml,
};

fn plist_version() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_plist_version"));
    cmd.env_remove("PLIST_VERSION_LOG");
    cmd
}

#[test]
fn shows_help() {
    plist_version()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plist_version"))
        .stdout(predicate::str::contains("--version <VALUE>"));
}

#[test]
fn tool_version_flag() {
    plist_version()
        .arg("--tool-version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn increments_build_number() {
    let dir = tempfile::tempdir().unwrap();
    let original = bundle_dict();
    let path = write_xml(dir.path(), &original);

    plist_version()
        .arg("build")
        .arg(&path)
        .args(["-v", "inc"])
        .assert()
        .success()
        .stdout("13")
        .stderr("");

    let updated = read_dict(&path);
    assert_eq!(updated.get(BUILD_KEY).and_then(|v| v.as_string()), Some("13"));
    assert_eq!(updated.get(RELEASE_KEY).and_then(|v| v.as_string()), Some("1.0.0"));
    assert_untouched(&original, &updated, BUILD_KEY);
}

#[test]
fn read_only_leaves_file_bytes_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_xml(dir.path(), &bundle_dict());
    let before = fs::read(&path).unwrap();

    plist_version()
        .arg("release")
        .arg(&path)
        .assert()
        .success()
        .stdout("1.0.0");

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn overwrites_release_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let original = bundle_dict();
    let path = write_xml(dir.path(), &original);

    plist_version()
        .arg("release")
        .arg(&path)
        .args(["--version", "2.1.0-beta 3"])
        .assert()
        .success()
        .stdout("2.1.0-beta 3");

    let updated = read_dict(&path);
    assert_eq!(
        updated.get(RELEASE_KEY).and_then(|v| v.as_string()),
        Some("2.1.0-beta 3")
    );
    assert_untouched(&original, &updated, RELEASE_KEY);
}

#[test]
fn increment_drops_minor_segments() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_xml(dir.path(), &bundle_dict());

    plist_version()
        .arg("release")
        .arg(&path)
        .args(["-v", "inc"])
        .assert()
        .success()
        .stdout("2");
}

#[test]
fn non_numeric_version_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut dict = bundle_dict();
    dict.insert(BUILD_KEY.into(), plist::Value::String("x.2".into()));
    let path = write_xml(dir.path(), &dict);
    let before = fs::read(&path).unwrap();

    plist_version()
        .arg("build")
        .arg(&path)
        .args(["-v", "inc"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("not an integer"));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn missing_key_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut dict = bundle_dict();
    dict.remove(RELEASE_KEY);
    let path = write_xml(dir.path(), &dict);
    let before = fs::read(&path).unwrap();

    plist_version()
        .arg("release")
        .arg(&path)
        .args(["-v", "3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(RELEASE_KEY));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    plist_version()
        .arg("build")
        .arg(dir.path().join("Missing.plist"))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn rejects_unknown_type() {
    plist_version()
        .args(["patch", "Info.plist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn binary_files_stay_binary() {
    let dir = tempfile::tempdir().unwrap();
    let original = bundle_dict();
    let path = write_binary(dir.path(), &original);

    plist_version()
        .arg("build")
        .arg(&path)
        .args(["-v", "40"])
        .assert()
        .success()
        .stdout("40");

    assert!(is_binary(&path));
    assert_untouched(&original, &read_dict(&path), BUILD_KEY);
}

#[test]
fn format_flag_converts_binary_to_xml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_binary(dir.path(), &bundle_dict());

    plist_version()
        .arg("build")
        .arg(&path)
        .args(["-v", "inc", "--format", "xml"])
        .assert()
        .success()
        .stdout("13");

    assert!(!is_binary(&path));
    assert!(fs::read_to_string(&path).unwrap().contains("<string>13</string>"));
}

#[test]
fn logs_go_to_stderr_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_xml(dir.path(), &bundle_dict());

    plist_version()
        .arg("build")
        .arg(&path)
        .args(["-v", "inc", "--log-level", "info"])
        .assert()
        .success()
        .stdout("13")
        .stderr(predicate::str::contains("version field updated"));
}

#[test]
fn log_level_can_come_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_xml(dir.path(), &bundle_dict());

    plist_version()
        .env("PLIST_VERSION_LOG", "debug")
        .arg("release")
        .arg(&path)
        .assert()
        .success()
        .stdout("1.0.0")
        .stderr(predicate::str::contains("loaded document"));
}

#[test]
fn overwrite_replaces_integer_field_with_string() {
    let dir = tempfile::tempdir().unwrap();
    let mut dict = bundle_dict();
    dict.insert(BUILD_KEY.into(), plist::Value::Integer(12_i64.into()));
    let path = write_xml(dir.path(), &dict);

    plist_version()
        .arg("build")
        .arg(&path)
        .args(["-v", "13"])
        .assert()
        .success()
        .stdout("13");

    let updated = read_dict(&path);
    assert_eq!(updated.get(BUILD_KEY), Some(&plist::Value::String("13".into())));
    assert_untouched(&dict, &updated, BUILD_KEY);
}

#[test]
fn increments_past_64_bits() {
    let dir = tempfile::tempdir().unwrap();
    let mut dict = bundle_dict();
    dict.insert(BUILD_KEY.into(), plist::Value::String("99999999999999999999.1".into()));
    let path = write_xml(dir.path(), &dict);

    plist_version()
        .arg("build")
        .arg(&path)
        .args(["-v", "inc"])
        .assert()
        .success()
        .stdout("100000000000000000000");
}

#[test]
fn version_value_does_not_swallow_flags() {
    plist_version()
        .args(["build", "Info.plist", "-v", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--version <VALUE>"));
}

#[test]
fn directory_is_reported_as_unreadable() {
    let dir = tempfile::tempdir().unwrap();

    plist_version()
        .arg("build")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to read file"));
}

#[cfg(unix)]
#[test]
fn symlinked_plist_stays_a_symlink() {
    let dir = tempfile::tempdir().unwrap();
    let shared = dir.path().join("shared");
    fs::create_dir(&shared).unwrap();
    let real = write_xml(&shared, &bundle_dict());
    let link = dir.path().join("Info.plist");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    plist_version()
        .arg("build")
        .arg(&link)
        .args(["-v", "13"])
        .assert()
        .success()
        .stdout("13");

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(read_dict(&real).get(BUILD_KEY).and_then(|v| v.as_string()), Some("13"));
}

#[cfg(unix)]
#[test]
fn hard_linked_plist_updates_every_link() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_xml(dir.path(), &bundle_dict());
    let other = dir.path().join("Other.plist");
    fs::hard_link(&path, &other).unwrap();

    plist_version()
        .arg("build")
        .arg(&path)
        .args(["-v", "inc"])
        .assert()
        .success()
        .stdout("13");

    assert_eq!(read_dict(&other).get(BUILD_KEY).and_then(|v| v.as_string()), Some("13"));
}
