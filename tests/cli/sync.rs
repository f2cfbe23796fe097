use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, setup_config};

#[test]
fn test_sync_end_to_end() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en/common.json", r#"{"a": "1", "b": "2"}"#)?;
    test.write_file("locales/en/error.json", r#"{"e": "x"}"#)?;
    test.write_file("locales/ko/common.json", r#"{"a": "old"}"#)?;

    assert_cmd_snapshot!(test.command().arg("sync"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Synchronizing locales against base locale 'en'

    common (2 keys)
      ko  +1 key

    error (1 key)
      ko  +1 key (created)

    Key totals:
      en  3
      ko  3

    ✓ All locales match the base key counts

    ✓ Added 2 keys, removed 0 keys in 2 files

    ----- stderr -----
    ");

    assert_eq!(test.json_keys("locales/ko/common.json")?, vec!["a", "b"]);
    assert_eq!(
        test.read_json("locales/ko/common.json")?,
        json!({"a": "old", "b": "2"})
    );
    assert_eq!(test.read_json("locales/ko/error.json")?, json!({"e": "x"}));
    Ok(())
}

#[test]
fn test_sync_removes_orphans_and_follows_base_order() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "locales/en/common.json",
        r#"{"common.c": "C", "common.a": "A", "common.b": "B"}"#,
    )?;
    test.write_file("locales/en/error.json", "{}")?;
    test.write_file(
        "locales/ko/common.json",
        r#"{"common.d": "ㄹ", "common.b": "ㄴ", "common.a": "ㄱ"}"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["sync", "--verbose"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Synchronizing locales against base locale 'en'

    common (3 keys)
      ko  +1 key -1 key
          + common.c
          - common.d

    error (0 keys)
      ko  (created)

    Key totals:
      en  3
      ko  3

    ✓ All locales match the base key counts

    ✓ Added 1 key, removed 1 key in 2 files

    ----- stderr -----
    ");

    assert_eq!(
        test.json_keys("locales/ko/common.json")?,
        vec!["common.c", "common.a", "common.b"]
    );
    let ko = test.read_json("locales/ko/common.json")?;
    assert_eq!(ko["common.a"], "ㄱ");
    assert_eq!(ko["common.c"], "C");
    Ok(())
}

#[test]
fn test_sync_twice_is_byte_identical() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en/common.json", r#"{"z": "Z", "a": "A"}"#)?;
    test.write_file("locales/en/error.json", r#"{"e": "E"}"#)?;
    test.write_file("locales/ko/common.json", r#"{"a": "에이", "q": "Q"}"#)?;

    test.run(&["sync"])?;
    let common = test.read_file("locales/ko/common.json")?;
    let error = test.read_file("locales/ko/error.json")?;

    assert_cmd_snapshot!(test.command().arg("sync"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Synchronizing locales against base locale 'en'

    common (2 keys)
      ko  up to date

    error (1 key)
      ko  up to date

    Key totals:
      en  3
      ko  3

    ✓ All locales match the base key counts

    ✓ All locales are already in sync

    ----- stderr -----
    ");

    assert_eq!(test.read_file("locales/ko/common.json")?, common);
    assert_eq!(test.read_file("locales/ko/error.json")?, error);
    Ok(())
}

#[test]
fn test_sync_skips_namespace_without_base_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en/common.json", r#"{"a": "A"}"#)?;
    test.write_file("locales/ko/error.json", r#"{"keep": "me"}"#)?;

    assert_cmd_snapshot!(test.command().arg("sync"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Synchronizing locales against base locale 'en'

    common (1 key)
      ko  +1 key (created)

    warning: base file for namespace 'error' not found, skipped (locales/en/error.json)

    Key totals:
      en  1
      ko  1

    ✓ All locales match the base key counts

    ✓ Added 1 key, removed 0 keys in 1 file

    ----- stderr -----
    ");

    assert_eq!(test.read_file("locales/ko/error.json")?, r#"{"keep": "me"}"#);
    Ok(())
}

#[test]
fn test_sync_base_locale_override() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/ko/common.json", r#"{"a": "ㄱ", "b": "ㄴ"}"#)?;
    test.write_file("locales/ko/error.json", "{}")?;
    test.write_file("locales/en/common.json", r#"{"a": "A"}"#)?;

    let output = test.run(&["sync", "--base-locale", "ko"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_json("locales/en/common.json")?, json!({"a": "A", "b": "ㄴ"}));
    Ok(())
}

#[test]
fn test_sync_malformed_file_aborts() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en/common.json", "[1, 2]")?;

    let settings = test.snapshot_settings();
    let _guard = settings.bind_to_scope();
    assert_cmd_snapshot!(test.command().arg("sync"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Root of JSON file must be an object: [TEMP_DIR]/locales/en/common.json
    ");
    Ok(())
}

#[test]
fn test_sync_invalid_config_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".nsyncrc.json",
        r#"{ "locales": ["ko"], "baseLocale": "en" }"#,
    )?;

    assert_cmd_snapshot!(test.command().arg("sync"), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: 'baseLocale' "en" is not listed in 'locales'
    "#);
    Ok(())
}
