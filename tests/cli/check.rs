use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("app/zcs/foo/page.html", "<p>こんにちは</p>\n")?;

    let output = test
        .command()
        .args(["--dry-run", "app/zcs/foo/page.html"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fooPage."), "stdout: {stdout}");
    assert!(stdout.contains("こんにちは"));
    assert!(stdout.contains("Would replace 1 occurrence"));
    assert_eq!(
        test.read_file("app/zcs/foo/page.html")?,
        "<p>こんにちは</p>\n"
    );
    assert!(!test.root().join("app/zcs/foo/page.ja.json").exists());
    Ok(())
}

#[test]
fn test_check_fails_on_japanese() -> Result<()> {
    let test = CliTest::with_file("app/zcs/app.js", "alert('はい');\n")?;

    let output = test.command().args(["--check", "app/zcs/app.js"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 1 Japanese string in app/zcs/app.js"));
    assert_eq!(test.read_file("app/zcs/app.js")?, "alert('はい');\n");
    Ok(())
}

#[test]
fn test_check_passes_without_japanese() -> Result<()> {
    let test = CliTest::with_file("app/zcs/app.js", "alert('hello');\n")?;

    let output = test.command().args(["--check", "app/zcs/app.js"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "✓ No Japanese text found in app/zcs/app.js\n"
    );
    Ok(())
}

#[test]
fn test_check_and_dry_run_conflict() -> Result<()> {
    let test = CliTest::with_file("app/zcs/app.js", "alert('はい');\n")?;

    let output = test
        .command()
        .args(["--check", "--dry-run", "app/zcs/app.js"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
