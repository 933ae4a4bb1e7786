use std::path::Path;

use serde::Deserialize;

use rewriter::files::DEFAULT_EXTENSION;
use rewriter::formatter::{DEFAULT_ARGS, DEFAULT_PROGRAM};

/// Settings read from a `--config` TOML file. Command-line flags override them.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extension of the files processed in directory mode.
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub formatter: FormatterConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FormatterConfig {
    /// If false, queries are only inlined and reordered.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the temporary file path.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_args() -> Vec<String> {
    DEFAULT_ARGS.iter().map(|a| a.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extension: default_extension(),
            formatter: FormatterConfig::default(),
        }
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        FormatterConfig {
            enabled: default_enabled(),
            program: default_program(),
            args: default_args(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        Config::parse(&text).map_err(|e| format!("{}: {}", path.display(), e))
    }

    pub fn parse(text: &str) -> Result<Config, String> {
        toml::from_str(text).map_err(|e| format!("TOML parse error: {}", e))
    }
}
