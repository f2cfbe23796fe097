use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, setup_config, stdout};

#[test]
fn test_split_partitions_by_prefix() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "locales/en.json",
        r#"{
  "common.save": "Save",
  "errors.notFound": "Not found",
  "common.cancel": "Cancel",
  "error.generic": "Something went wrong",
  "legacyThing": "Old"
}"#,
    )?;
    test.write_file("locales/ko.json", r#"{"common.save": "저장"}"#)?;

    assert_cmd_snapshot!(test.command().arg("split"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ en  5 keys -> 3 files
        common  2 keys  locales/en/common.json
        error   2 keys  locales/en/error.json
        misc    1 key  locales/en/misc.json
    ✓ ko  1 key -> 1 file
        common  1 key  locales/ko/common.json

    ✓ Split 2 locales into 4 namespace files

    ----- stderr -----
    ");

    assert_eq!(
        test.json_keys("locales/en/common.json")?,
        vec!["common.cancel", "common.save"]
    );
    assert_eq!(
        test.json_keys("locales/en/error.json")?,
        vec!["error.generic", "errors.notFound"]
    );
    assert_eq!(test.read_json("locales/en/misc.json")?, json!({"legacyThing": "Old"}));
    assert_eq!(test.read_json("locales/ko/common.json")?, json!({"common.save": "저장"}));

    // Namespaces with no keys produce no file.
    assert!(!test.exists("locales/ko/error.json"));
    assert!(!test.exists("locales/ko/misc.json"));
    Ok(())
}

#[test]
fn test_split_output_is_indented_with_trailing_newline() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en.json", r#"{"common.b": "B", "common.a": "A"}"#)?;
    test.write_file("locales/ko.json", "{}")?;

    test.run(&["split"])?;
    assert_eq!(
        test.read_file("locales/en/common.json")?,
        "{\n  \"common.a\": \"A\",\n  \"common.b\": \"B\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_split_missing_legacy_file_fails_only_that_locale() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en.json", r#"{"common.a": "A"}"#)?;

    let settings = test.snapshot_settings();
    let _guard = settings.bind_to_scope();
    assert_cmd_snapshot!(test.command().arg("split"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ en  1 key -> 1 file
        common  1 key  locales/en/common.json
    ✘ ko  Legacy translation file not found: [TEMP_DIR]/locales/ko.json

    ✘ 1 of 2 locales failed

    ----- stderr -----
    ");

    assert!(test.exists("locales/en/common.json"));
    Ok(())
}

#[test]
fn test_split_malformed_legacy_file_fails_only_that_locale() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en.json", "{ not json")?;
    test.write_file("locales/ko.json", r#"{"common.a": "ㄱ"}"#)?;

    let output = test.run(&["split"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Failed to parse JSON file"));
    assert!(test.exists("locales/ko/common.json"));
    Ok(())
}

#[test]
fn test_split_colliding_flat_and_nested_keys_fail_that_locale() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "locales/en.json",
        r#"{"common.save": "Flat", "common": {"save": "Nested"}}"#,
    )?;
    test.write_file("locales/ko.json", r#"{"common.save": "저장"}"#)?;

    let settings = test.snapshot_settings();
    let _guard = settings.bind_to_scope();
    assert_cmd_snapshot!(test.command().arg("split"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ en  Failed to flatten legacy file: [TEMP_DIR]/locales/en.json: Key "common.save" is defined more than once after flattening
    ✓ ko  1 key -> 1 file
        common  1 key  locales/ko/common.json

    ✘ 1 of 2 locales failed

    ----- stderr -----
    "#);

    assert!(!test.exists("locales/en/common.json"));
    assert!(test.exists("locales/ko/common.json"));
    Ok(())
}
