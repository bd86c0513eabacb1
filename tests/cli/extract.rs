use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const INDEX: &str = "<h1>{% trans %}Welcome{% endtrans %}</h1>
<p>{{ 'Sign in' | trans }}</p>
";

#[test]
fn test_extract_writes_reference() -> Result<()> {
    let test = CliTest::with_template("index.html", INDEX)?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains(
        "Extracted 2 messages from 1 template into data/page-l10n/reference.messages"
    ));

    assert_eq!(
        test.read_catalogue("reference.messages")?,
        "{% msg index.html#L1 %}
{% en %}
Welcome
{% endmsg %}

{% msg index.html#L2 %}
{% en %}
Sign in
{% endmsg %}
"
    );

    Ok(())
}

#[test]
fn test_extract_plural_comment_and_duplicates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_template(
        "a.html",
        "{% trans %}{# Cart badge #}one item{% plural %}{{ n }} items{% endtrans %}\n",
    )?;
    test.write_template("b.html", "\n{% trans %}one item{% endtrans %}\n")?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("warning: \"one item\""));
    assert!(out.contains("--> b.html#L2"));
    assert!(out.contains("keeping the plural and comment from a.html#L1"));

    assert_eq!(
        test.read_catalogue("reference.messages")?,
        "{% msg a.html#L1 b.html#L2 %}
{# Cart badge #}
{% en %}
one item
{% plural %}
{{ n }} items
{% endmsg %}
"
    );

    Ok(())
}

#[test]
fn test_extract_is_idempotent() -> Result<()> {
    let test = CliTest::with_template("index.html", INDEX)?;

    test.run(&["extract"])?;
    let first = test.read_catalogue("reference.messages")?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("reference.messages unchanged"));
    assert_eq!(test.read_catalogue("reference.messages")?, first);

    Ok(())
}

#[test]
fn test_extract_unterminated_block_fails_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_template("a.html", "{% trans %}Fine{% endtrans %}")?;
    test.write_template("b.html", "line one\n{% trans %}Never closed")?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("b.html"), "{err}");
    assert!(err.contains("block opened on line 2 is never closed"), "{err}");
    assert!(!test.catalogue_exists("reference.messages"));

    Ok(())
}

#[test]
fn test_extract_skips_ignored_files() -> Result<()> {
    let test = CliTest::with_template("index.html", INDEX)?;
    test.write_template("README", "{% trans %}Not a template{% endtrans %}")?;
    test.write_template("logo.icon", "{% trans %}Icon{% endtrans %}")?;
    test.write_template("feed.xml", "{% trans %}Feed{% endtrans %}")?;
    test.write_template("feed.xml.mime", "application/atom+xml")?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let reference = test.read_catalogue("reference.messages")?;
    assert!(reference.contains("Welcome"));
    assert!(!reference.contains("Not a template"));
    assert!(!reference.contains("Icon"));
    assert!(!reference.contains("Feed"));

    Ok(())
}

#[test]
fn test_extract_respects_config_roots() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".l10nrc.json",
        r#"{ "templatesRoot": "pages", "messagesRoot": "l10n" }"#,
    )?;
    test.write_file("pages/index.html", INDEX)?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(test.read_file("l10n/reference.messages")?.contains("Sign in"));

    Ok(())
}

#[test]
fn test_extract_missing_templates_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Templates directory not found"));

    Ok(())
}
