use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["templatesRoot", "messagesRoot", "referenceFile", "sourceLanguage"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{field}' field"
        );
    }
    assert_eq!(parsed["sourceLanguage"], "en");

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Created .l10nrc.json"));

    assert!(test.root().join(".l10nrc.json").exists());
    let content = test.read_file(".l10nrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".l10nrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".l10nrc.json already exists"));
    assert_eq!(test.read_file(".l10nrc.json")?, "{}");

    Ok(())
}
