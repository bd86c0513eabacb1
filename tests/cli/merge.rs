use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const REFERENCE: &str = "{% msg index.html#L1 %}
{% en %}
Welcome
{% endmsg %}

{% msg index.html#L2 %}
{% en %}
one file
{% plural %}
{{ n }} files
{% endmsg %}
";

#[test]
fn test_merge_uses_existing_reference() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalogue("reference.messages", REFERENCE)?;
    test.write_catalogue(
        "fr",
        "{% msg %}\nBienvenue\n{% en %}\nWelcome\n{% endmsg %}\n",
    )?;

    let output = test.run(&["merge", "fr"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("fr: 1/2 messages translated (1 pending)"));

    assert_eq!(
        test.read_catalogue("fr")?,
        "{% msg index.html#L1 %}
Bienvenue
{% en %}
Welcome
{% endmsg %}

{% msg index.html#L2 %}
{% en %}
one file
{% plural %}
{{ n }} files
{% endmsg %}
"
    );
    assert_eq!(test.read_catalogue("reference.messages")?, REFERENCE);

    Ok(())
}

#[test]
fn test_merge_custom_reference() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalogue("next.messages", REFERENCE)?;

    let output = test.run(&["merge", "de", "--reference", "next.messages"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(test.read_catalogue("de")?.contains("one file"));

    Ok(())
}

#[test]
fn test_merge_without_reference_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["merge", "de"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Reference catalogue not found"));
    assert!(!test.catalogue_exists("de"));

    Ok(())
}
