use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, setup_config};

#[test]
fn test_types_generates_key_unions() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file(
        "locales/en/common.json",
        r#"{"common.save": "Save", "app.title": "App"}"#,
    )?;
    test.write_file("locales/en/error.json", r#"{"errors.notFound": "Not found"}"#)?;

    assert_cmd_snapshot!(test.command().arg("types"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Wrote src/types.generated.ts (2 namespaces, 3 keys)

    ----- stderr -----
    ");

    let generated = test.read_file("src/types.generated.ts")?;
    assert!(generated.starts_with("// This file is generated by `nsync types`."));
    assert!(generated.contains(
        "export type CommonKeys =\n  | 'app.title'\n  | 'common.save';"
    ));
    assert!(generated.contains("export type ErrorKeys =\n  | 'errors.notFound';"));
    assert!(generated.contains(
        "export type TranslationKey =\n  | 'app.title'\n  | 'common.save'\n  | 'errors.notFound';"
    ));
    assert!(generated.contains(
        "export type TranslationPrefix =\n  | 'app'\n  | 'common'\n  | 'errors';"
    ));
    Ok(())
}

#[test]
fn test_types_second_run_is_up_to_date() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en/common.json", r#"{"common.a": "A"}"#)?;
    test.write_file("locales/en/error.json", "{}")?;

    test.run(&["types"])?;
    let first = test.read_file("src/types.generated.ts")?;
    assert_cmd_snapshot!(test.command().arg("types"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ src/types.generated.ts is up to date (2 namespaces, 1 key)

    ----- stderr -----
    ");
    assert_eq!(test.read_file("src/types.generated.ts")?, first);
    Ok(())
}

#[test]
fn test_types_warns_on_missing_namespace() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test)?;
    test.write_file("locales/en/common.json", r#"{"common.a": "A"}"#)?;

    assert_cmd_snapshot!(test.command().arg("types"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: base file for namespace 'error' not found, omitted from types (locales/en/error.json)
    ✓ Wrote src/types.generated.ts (1 namespace, 1 key)

    ----- stderr -----
    ");

    let generated = test.read_file("src/types.generated.ts")?;
    assert!(!generated.contains("ErrorKeys"));
    assert!(generated.contains("export type TranslationNamespace =\n  | 'common';"));
    Ok(())
}
