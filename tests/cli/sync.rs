use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const INDEX: &str = "<h1>{% trans %}Welcome{% endtrans %}</h1>
<p>{{ 'Sign in' | trans }}</p>
";

const GERMAN: &str = "{% msg old.html#L1 %}
Willkommen
{% en %}
Welcome
{% endmsg %}

{% msg old.html#L3 %}
Tschüss
{% en %}
Goodbye
{% endmsg %}
";

fn project() -> Result<CliTest> {
    let test = CliTest::with_template("index.html", INDEX)?;
    test.write_catalogue("de", GERMAN)?;
    Ok(test)
}

#[test]
fn test_sync_reconciles_locale() -> Result<()> {
    let test = project()?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(
        stdout(&output)
            .contains("de: 1/2 messages translated (1 pending, 1 moved to de.unused)")
    );

    assert_eq!(
        test.read_catalogue("de")?,
        "{% msg index.html#L1 %}
Willkommen
{% en %}
Welcome
{% endmsg %}

{% msg index.html#L2 %}
{% en %}
Sign in
{% endmsg %}
"
    );
    assert_eq!(
        test.read_catalogue("de.unused")?,
        "{% msg %}
Tschüss
{% en %}
Goodbye
{% endmsg %}
"
    );
    assert!(test.catalogue_exists("reference.messages"));

    Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
    let test = project()?;

    test.run(&["sync"])?;
    let locale = test.read_catalogue("de")?;
    let unused = test.read_catalogue("de.unused")?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(!stdout(&output).contains("Updated"));
    assert_eq!(test.read_catalogue("de")?, locale);
    assert_eq!(test.read_catalogue("de.unused")?, unused);

    Ok(())
}

#[test]
fn test_sync_revives_from_unused() -> Result<()> {
    let test = project()?;
    test.run(&["sync"])?;

    test.write_template(
        "index.html",
        &format!("{}<p>{{% trans %}}Goodbye{{% endtrans %}}</p>\n", INDEX),
    )?;
    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("1 restored from de.unused"));

    let locale = test.read_catalogue("de")?;
    assert!(locale.ends_with(
        "{% msg index.html#L3 %}
Tschüss
{% en %}
Goodbye
{% endmsg %}
"
    ));
    assert_eq!(test.read_catalogue("de.unused")?, "");

    Ok(())
}

#[test]
fn test_sync_check_reports_out_of_date() -> Result<()> {
    let test = project()?;

    let output = test.run(&["sync", "--check"])?;
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Would update data/page-l10n/de"));
    assert!(out.contains("out of date"));
    assert_eq!(test.read_catalogue("de")?, GERMAN);
    assert!(!test.catalogue_exists("reference.messages"));
    assert!(!test.catalogue_exists("de.unused"));

    test.run(&["sync"])?;
    let output = test.run(&["sync", "--check"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    assert!(stdout(&output).contains("All catalogues are up to date"));

    Ok(())
}

#[test]
fn test_sync_malformed_catalogue_writes_nothing() -> Result<()> {
    let test = CliTest::with_template("index.html", INDEX)?;
    test.write_catalogue("de", GERMAN)?;
    test.write_catalogue("fr", "{% msg %}\nBienvenue\n{% en %}\nWelcome\n")?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("data/page-l10n/fr"), "{err}");
    assert!(err.contains("never closed"), "{err}");

    assert_eq!(test.read_catalogue("de")?, GERMAN);
    assert!(!test.catalogue_exists("de.unused"));
    assert!(!test.catalogue_exists("reference.messages"));

    Ok(())
}

#[test]
fn test_sync_creates_requested_locale() -> Result<()> {
    let test = project()?;

    let output = test.run(&["sync", "--locale", "fr"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("fr: 0/2 messages translated (2 pending)"));

    assert!(test.read_catalogue("fr")?.contains("{% en %}\nSign in\n"));
    assert!(!test.catalogue_exists("fr.unused"));
    assert_eq!(test.read_catalogue("de")?, GERMAN);

    Ok(())
}

#[test]
fn test_sync_verbose_lists_pending_keys() -> Result<()> {
    let test = project()?;

    let output = test.run(&["sync", "-v"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("note: \"Sign in\" awaiting translation in de"));
    assert!(out.contains("note: \"Goodbye\" moved to de.unused"));

    Ok(())
}

#[test]
fn test_sync_keeps_translations_for_awkward_template_names() -> Result<()> {
    let test = CliTest::new()?;
    test.write_template("don't.html", "{% trans %}Hello{% endtrans %}\n")?;
    test.write_template("my page.html", "\n{% trans %}Bye{% endtrans %}\n")?;
    test.write_catalogue(
        "de",
        "{% msg %}\nHallo\n{% en %}\nHello\n{% endmsg %}\n\n{% msg %}\nTschüss\n{% en %}\nBye\n{% endmsg %}\n",
    )?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let first = test.read_catalogue("de")?;
    assert_eq!(
        first,
        "{% msg \"don't.html#L1\" %}
Hallo
{% en %}
Hello
{% endmsg %}

{% msg \"my page.html#L2\" %}
Tschüss
{% en %}
Bye
{% endmsg %}
"
    );

    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("de: 2/2 messages translated"));
    assert_eq!(test.read_catalogue("de")?, first);
    assert!(!test.catalogue_exists("de.unused"));

    Ok(())
}

#[test]
fn test_sync_rejects_catalogue_with_unclosed_tag() -> Result<()> {
    let test = CliTest::with_template("index.html", INDEX)?;
    let broken = "{% msg %}\nWillkommen\n{% en %}\nWelcome\n{% endmsg %}\n\n{% msg don't.html#L1 %}\n{% en %}\nSign in\n{% endmsg %}\n";
    test.write_catalogue("de", broken)?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("data/page-l10n/de: line 7: `{%` is never closed"), "{err}");
    assert_eq!(test.read_catalogue("de")?, broken);

    Ok(())
}
