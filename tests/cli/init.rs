use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_default_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .nsyncrc.json

    ----- stderr -----
    ");

    let config = test.read_json(".nsyncrc.json")?;
    assert_eq!(config["baseLocale"], "en");
    assert_eq!(config["fallbackNamespace"], "misc");
    assert_eq!(config["namespaces"].as_array().map(Vec::len), Some(11));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".nsyncrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .nsyncrc.json already exists
    ");

    assert_eq!(test.read_file(".nsyncrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));
    Ok(())
}
