use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, single_entry};

#[test]
fn test_html_default_anchor() -> Result<()> {
    let test = CliTest::with_file("app/zcs/foo/page.html", "<p>こんにちは</p>\n")?;

    let output = test.command().arg("app/zcs/foo/page.html").output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let side_car = test.read_json("app/zcs/foo/page.ja.json")?;
    let (key, text) = single_entry(&side_car["fooPage"]);
    assert_eq!(text, "こんにちは");
    assert!(!key.is_empty() && key.is_ascii());

    assert_eq!(
        test.read_file("app/zcs/foo/page.html")?,
        format!("<p>{{{{ 'fooPage.{key}' | translate }}}}</p>\n")
    );

    let raw = test.read_file("app/zcs/foo/page.ja.json")?;
    assert!(raw.contains("こんにちは"), "text should not be escaped");
    assert!(raw.ends_with("}\n"));
    Ok(())
}

#[test]
fn test_trim_namespace() -> Result<()> {
    let test = CliTest::with_file("web/zcs/foo/bar_baz.html", "<span>はい</span>\n")?;

    let output = test
        .command()
        .args(["-t", "zcs", "web/zcs/foo/bar_baz.html"])
        .output()?;
    assert!(output.status.success());

    let side_car = test.read_json("web/zcs/foo/bar_baz.ja.json")?;
    let (_, text) = single_entry(&side_car["fooBarBaz"]);
    assert_eq!(text, "はい");
    Ok(())
}

#[test]
fn test_trim_not_found_changes_nothing() -> Result<()> {
    let test = CliTest::with_file("app/zcs/foo/page.html", "<p>こんにちは</p>\n")?;

    let output = test
        .command()
        .args(["--trim", "xyz", "app/zcs/foo/page.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_snapshot!(
        String::from_utf8_lossy(&output.stderr),
        @r#"Error: anchor "xyz" not found in path app/zcs/foo/page.html"#
    );
    assert_eq!(
        test.read_file("app/zcs/foo/page.html")?,
        "<p>こんにちは</p>\n"
    );
    assert!(!test.root().join("app/zcs/foo/page.ja.json").exists());
    Ok(())
}

#[test]
fn test_missing_default_anchor_fails() -> Result<()> {
    let test = CliTest::with_file("views/page.html", "<p>はい</p>\n")?;

    let output = test.command().arg("views/page.html").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("anchor \"zcs\" not found"));
    assert_eq!(test.read_file("views/page.html")?, "<p>はい</p>\n");
    Ok(())
}

#[test]
fn test_explicit_key_nests_dictionary() -> Result<()> {
    let test = CliTest::with_file("app/zcs/foo/page.html", "<p>こんにちは</p>\n")?;

    let output = test
        .command()
        .args(["-k", "app.foo.bar", "app/zcs/foo/page.html"])
        .output()?;
    assert!(output.status.success());

    let side_car = test.read_json("app/zcs/foo/page.ja.json")?;
    let (key, text) = single_entry(&side_car["app"]["foo"]["bar"]);
    assert_eq!(text, "こんにちは");
    assert_eq!(
        test.read_file("app/zcs/foo/page.html")?,
        format!("<p>{{{{ 'app.foo.bar.{key}' | translate }}}}</p>\n")
    );
    Ok(())
}

#[test]
fn test_js_dest_prefix() -> Result<()> {
    let test = CliTest::with_file(
        "src/zcs/users/list.js",
        "var n = 1;\nalert('あいうえお');\n",
    )?;

    let output = test
        .command()
        .args([
            "-d",
            "out/locales",
            "-p",
            "_msgs",
            "src/zcs/users/list.js",
        ])
        .output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("out/locales/list_msgs.json")?,
        "{\n  \"usersList\": {\n    \"aiueo\": \"あいうえお\"\n  }\n}\n"
    );
    assert_eq!(
        test.read_file("src/zcs/users/list.js")?,
        "var n = 1;\nalert($translate.instant('usersList.aiueo'));\n"
    );
    assert!(!test.root().join("src/zcs/users/list_msgs.json").exists());
    Ok(())
}

#[test]
fn test_rb_writes_yaml() -> Result<()> {
    let test = CliTest::with_file(
        "app/zcs/models/user.rb",
        "class User\n  MESSAGE = \"アイウエオ\"\nend\n",
    )?;

    let output = test.command().arg("app/zcs/models/user.rb").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("app/zcs/models/user.yml")?,
        "modelsUser:\n  aiueo: アイウエオ\n"
    );
    assert_eq!(
        test.read_file("app/zcs/models/user.rb")?,
        "class User\n  MESSAGE = t('modelsUser.aiueo')\nend\n"
    );
    Ok(())
}

#[test]
fn test_unsupported_extension() -> Result<()> {
    let test = CliTest::with_file("app/zcs/page.vue", "<p>はい</p>\n")?;

    let output = test.command().arg("app/zcs/page.vue").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported file extension"));
    assert_eq!(test.read_file("app/zcs/page.vue")?, "<p>はい</p>\n");
    Ok(())
}

#[test]
fn test_rerun_is_idempotent() -> Result<()> {
    let test = CliTest::with_file(
        "app/zcs/foo/page.html",
        "<div>\n  <h1>日本語</h1>\n  <p>日本</p>\n</div>\n",
    )?;

    let first = test.command().arg("app/zcs/foo/page.html").output()?;
    assert!(first.status.success());
    let html = test.read_file("app/zcs/foo/page.html")?;
    let side_car = test.read_file("app/zcs/foo/page.ja.json")?;
    assert_eq!(html.matches("| translate }}").count(), 2);
    assert!(!html.contains("日本"));

    let second = test.command().arg("app/zcs/foo/page.html").output()?;
    assert!(second.status.success());
    assert_eq!(test.read_file("app/zcs/foo/page.html")?, html);
    assert_eq!(test.read_file("app/zcs/foo/page.ja.json")?, side_car);
    Ok(())
}

#[test]
fn test_config_file_segments_strategy() -> Result<()> {
    let test = CliTest::with_file("a/b/c/page.html", "<p>はい</p>\n")?;
    test.write_file(
        ".romakeyrc.json",
        r#"{ "defaultNamespace": "segments", "segmentCount": 1 }"#,
    )?;

    let output = test.command().arg("a/b/c/page.html").output()?;
    assert!(output.status.success());

    let side_car = test.read_json("a/b/c/page.ja.json")?;
    assert!(side_car.get("cPage").is_some(), "got {side_car}");
    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let test = CliTest::with_file("app/zcs/page.html", "<p>はい</p>\n")?;
    test.write_file(".romakeyrc.json", r#"{ "maxKeyWords": 0 }"#)?;

    let output = test.command().arg("app/zcs/page.html").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("maxKeyWords"));
    Ok(())
}
