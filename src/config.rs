use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".potgenrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// File extensions (without the dot) that are scanned for messages.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names skipped anywhere in the tree.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    /// Source file holding the label remap table, relative to the source root.
    #[serde(default = "default_remap_file")]
    pub remap_file: String,
    /// Catalog destination, relative to the source root.
    #[serde(default = "default_output")]
    pub output: String,
    /// Append `:<line>` to every location.
    #[serde(default)]
    pub line_numbers: bool,
    #[serde(default)]
    pub header: HeaderConfig,
}

/// Metadata written at the top of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderConfig {
    /// Leading `#` comment lines. An empty string renders a bare `#`.
    #[serde(default = "default_header_comments")]
    pub comments: Vec<String>,
    #[serde(default = "default_project_id_version")]
    pub project_id_version: String,
    #[serde(default = "default_report_msgid_bugs_to")]
    pub report_msgid_bugs_to: String,
}

fn default_extensions() -> Vec<String> {
    ["cpp", "h"].map(String::from).to_vec()
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["thirdparty".to_string()]
}

fn default_remap_file() -> String {
    "editor/editor_property_name_processor.cpp".to_string()
}

fn default_output() -> String {
    "editor/translations/editor.pot".to_string()
}

fn default_header_comments() -> Vec<String> {
    [
        "LANGUAGE translation of the Godot Engine editor.",
        "Copyright (c) 2007-2022 Juan Linietsky, Ariel Manzur.",
        "Copyright (c) 2014-2022 Godot Engine contributors (cf. AUTHORS.md).",
        "This file is distributed under the same license as the Godot source code.",
        "",
        "FIRST AUTHOR <EMAIL@ADDRESS>, YEAR.",
        "",
    ]
    .map(String::from)
    .to_vec()
}

fn default_project_id_version() -> String {
    "Godot Engine editor".to_string()
}

fn default_report_msgid_bugs_to() -> String {
    "https://github.com/godotengine/godot".to_string()
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            comments: default_header_comments(),
            project_id_version: default_project_id_version(),
            report_msgid_bugs_to: default_report_msgid_bugs_to(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            remap_file: default_remap_file(),
            output: default_output(),
            line_numbers: false,
            header: HeaderConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                bail!("Invalid extension in 'extensions': \"{}\" (omit the dot)", ext);
            }
        }
        for dir in &self.exclude_dirs {
            if dir.is_empty() || dir.contains('/') || dir.contains('\\') {
                bail!("Invalid directory name in 'excludeDirs': \"{}\"", dir);
            }
        }
        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
