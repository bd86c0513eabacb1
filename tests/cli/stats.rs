use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const REFERENCE: &str = "{% msg a.html#L1 %}
{% en %}
Welcome
{% endmsg %}

{% msg a.html#L2 %}
{% en %}
Sign in
{% endmsg %}
";

#[test]
fn test_stats_counts_translated_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalogue("reference.messages", REFERENCE)?;
    test.write_catalogue(
        "de",
        "{% msg %}\nWillkommen\n{% en %}\nWelcome\n{% endmsg %}\n\n{% msg %}\n{% en %}\nSign in\n{% endmsg %}\n",
    )?;
    test.write_catalogue(
        "it",
        "{% msg %}\nBenvenuto\n{% en %}\nWelcome\n{% endmsg %}\n\n{% msg %}\nAccedi\n{% en %}\nSign in\n{% endmsg %}\n",
    )?;
    test.write_catalogue("it.unused", "{% msg %}\nVecchio\n{% en %}\nOld\n{% endmsg %}\n")?;

    let output = test.run(&["stats"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("de: 1/2 messages translated (50%)"));
    assert!(out.contains("it: 2/2 messages translated (100%)"));
    assert!(!out.contains("it.unused"));

    Ok(())
}

#[test]
fn test_stats_selected_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalogue("reference.messages", REFERENCE)?;
    test.write_catalogue("de", "")?;

    let output = test.run(&["stats", "--locale", "pt-BR"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("pt-BR: 0/2 messages translated (0%)"));
    assert!(!out.contains("de:"));

    Ok(())
}
