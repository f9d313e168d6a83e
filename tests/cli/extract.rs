use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CATALOG_PATH, CliTest, stderr, stdout};

const REMAP_FILE: &str = "editor/editor_property_name_processor.cpp";

fn godot_like_tree() -> Result<CliTest> {
    let test = CliTest::with_file(
        REMAP_FILE,
        r#"
EditorPropertyNameProcessor::EditorPropertyNameProcessor() {
	capitalize_string_remaps["Msaa"] = "MSAA";
	capitalize_string_remaps["2d"] = "2D";
}
"#,
    )?;
    test.write_file(
        "scene/main/node.cpp",
        r#"
void Node::_bind_methods() {
	// TRANSLATORS: Scale of the node,
	// relative to its parent.
	set_label(TTR("Scale"));
	ADD_GROUP("Process", "process_");
	GLOBAL_DEF_RST("rendering/anti_aliasing/msaa_3d", 0);
}
"#,
    )?;
    test.write_file(
        "editor/other.cpp",
        r#"
void Other::_ready() {
	set_label(TTR("Scale"));
	set_label(RTR("Rendering"));
}
"#,
    )?;
    test.write_file("thirdparty/lib/lib.cpp", r#"TTR("Vendored");"#)?;
    test.write_file("editor/notes.md", r#"TTR("Not source");"#)?;
    Ok(test)
}

#[test]
fn test_extract_writes_catalog() -> Result<()> {
    let test = godot_like_tree()?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_catalog_body()?,
        r#"#. TRANSLATORS: Scale of the node,
#. relative to its parent.
#: editor/other.cpp scene/main/node.cpp
msgid "Scale"
msgstr ""

#: editor/other.cpp scene/main/node.cpp
msgid "Rendering"
msgstr ""

#: scene/main/node.cpp
msgid "Process"
msgstr ""

#: scene/main/node.cpp
msgid "Anti Aliasing"
msgstr ""

#: scene/main/node.cpp
msgid "MSAA 3D"
msgstr ""
"#
    );

    let out = stdout(&output);
    assert!(out.contains("Extracted 5 messages from 3 source files"));
    assert!(out.contains("Template created (no previous catalog)."));

    Ok(())
}

#[test]
fn test_extract_header() -> Result<()> {
    let test = CliTest::with_file("main.cpp", r#"TTR("Hello");"#)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog = test.read_file(CATALOG_PATH)?;
    insta::assert_snapshot!(catalog, @r#"
    # LANGUAGE translation of the Godot Engine editor.
    # Copyright (c) 2007-2022 Juan Linietsky, Ariel Manzur.
    # Copyright (c) 2014-2022 Godot Engine contributors (cf. AUTHORS.md).
    # This file is distributed under the same license as the Godot source code.
    #
    # FIRST AUTHOR <EMAIL@ADDRESS>, YEAR.
    #
    #, fuzzy
    msgid ""
    msgstr ""
    "Project-Id-Version: Godot Engine editor\n"
    "Report-Msgid-Bugs-To: https://github.com/godotengine/godot\n"
    "MIME-Version: 1.0\n"
    "Content-Type: text/plain; charset=UTF-8\n"
    "Content-Transfer-Encoding: 8-bit\n"

    #: main.cpp
    msgid "Hello"
    msgstr ""
    "#);

    Ok(())
}

#[test]
fn test_extract_with_line_numbers() -> Result<()> {
    let test = godot_like_tree()?;

    let output = test.extract_command().arg("--with-line-nb").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let body = test.read_catalog_body()?;
    assert!(body.contains("#: editor/other.cpp:3 scene/main/node.cpp:5\nmsgid \"Scale\""));
    assert!(body.contains("#: scene/main/node.cpp:7\nmsgid \"MSAA 3D\""));

    Ok(())
}

#[test]
fn test_extract_is_idempotent() -> Result<()> {
    let test = godot_like_tree()?;

    test.extract_command().output()?;
    let first = test.read_file(CATALOG_PATH)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert_eq!(test.read_file(CATALOG_PATH)?, first);
    assert!(stdout(&output).contains("Template unchanged."));

    Ok(())
}

#[test]
fn test_extract_reports_changes() -> Result<()> {
    let test = godot_like_tree()?;
    test.extract_command().output()?;

    test.write_file(
        "editor/other.cpp",
        r#"
void Other::_ready() {
	set_label(TTR("Scale"));
	set_label(TTR("Skew"));
}
"#,
    )?;
    let output = test.extract_command().output()?;

    // "Skew" is new; "Rendering" is still produced by the property path.
    assert!(stdout(&output).contains("Template changes: 1 added, 0 removed"));

    Ok(())
}

#[test]
fn test_missing_remap_file_warns_and_continues() -> Result<()> {
    let test = CliTest::with_file("scene/node.cpp", r#"GLOBAL_DEF("msaa_3d/x", 0);"#)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: Remap table not found"));
    assert!(test.read_catalog_body()?.contains("msgid \"Msaa 3D\""));

    Ok(())
}

#[test]
fn test_custom_config() -> Result<()> {
    let test = CliTest::with_file(
        ".potgenrc.json",
        r#"{
        "extensions": ["cc"],
        "excludeDirs": ["vendor"],
        "output": "po/messages.pot",
        "lineNumbers": true
    }"#,
    )?;
    test.write_file("src/app.cc", "\nTTR(\"Quit\");\n")?;
    test.write_file("src/app.cpp", r#"TTR("Wrong extension");"#)?;
    test.write_file("vendor/dep.cc", r#"TTR("Vendored");"#)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog = test.read_file("po/messages.pot")?;
    assert!(catalog.contains("#: src/app.cc:2\nmsgid \"Quit\""));
    assert!(!catalog.contains("Wrong extension"));
    assert!(!catalog.contains("Vendored"));

    Ok(())
}

#[test]
fn test_unknown_config_field_is_fatal() -> Result<()> {
    let test = CliTest::with_file(".potgenrc.json", r#"{ "lineNumber": true }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_unknown_argument_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().arg("--bogus").output()?;
    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_missing_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .extract_command()
        .arg("--root")
        .arg(test.root().join("missing"))
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Source root is not a directory"));

    Ok(())
}

#[test]
fn test_empty_message_is_skipped_with_warning() -> Result<()> {
    let test = CliTest::with_file("main.cpp", "TTR(\"\");\nTTR(\"Hello\");\n")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("warning: main.cpp: empty message skipped"));
    assert!(stdout(&output).contains("1 message occurrence was skipped"));
    assert_eq!(test.read_catalog_body()?, "#: main.cpp\nmsgid \"Hello\"\nmsgstr \"\"\n");

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_source_file_is_extracted() -> Result<()> {
    let test = CliTest::with_file("real.txt", "TTR(\"Linked\");\n")?;
    test.write_file("scene/node.cpp", "")?;
    std::os::unix::fs::symlink(test.root().join("real.txt"), test.root().join("scene/link.cpp"))?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.read_catalog_body()?.contains("#: scene/link.cpp\nmsgid \"Linked\""));

    Ok(())
}
