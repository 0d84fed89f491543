use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Error;

const CONFIG_FILE_NAME: &str = "bin2cpp.toml";
pub const DEFAULT_NAME: &str = "data";

/// Project defaults read from `bin2cpp.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Bin2CppConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Default, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub compress: bool,
}

impl Bin2CppConfig {
    pub fn resolve_name(&self, cli_name: Option<&str>) -> String {
        cli_name
            .or(self.defaults.name.as_deref())
            .unwrap_or(DEFAULT_NAME)
            .to_string()
    }

    pub fn resolve_compress(&self, cli_compress: bool) -> bool {
        cli_compress || self.defaults.compress
    }
}

/// Validated inputs of one conversion. Immutable once built.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    input: PathBuf,
    output: PathBuf,
    name: String,
    compress: bool,
}

impl PipelineConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        name: impl Into<String>,
        compress: bool,
    ) -> Result<Self, Error> {
        let input = input.into();
        let output = output.into();
        let name = name.into();

        if input.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("Input file name is empty".into()));
        }
        if output.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("Output file name is empty".into()));
        }
        if name.is_empty() {
            return Err(Error::InvalidConfig("Array name is empty".into()));
        }
        if !is_cpp_identifier(&name) {
            warn!("Array name '{}' is not a valid C++ identifier", name);
        }

        Ok(Self {
            input,
            output,
            name,
            compress,
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compress(&self) -> bool {
        self.compress
    }
}

fn is_cpp_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Loads `bin2cpp.toml` from the current directory or its nearest ancestor,
/// stopping at the enclosing repository root.
pub fn load() -> Result<Bin2CppConfig> {
    let current_dir = std::env::current_dir()?;
    load_from(&current_dir)
}

pub fn load_from(start_dir: &Path) -> Result<Bin2CppConfig> {
    let Some(path) = find_config_path(start_dir) else {
        return Ok(Bin2CppConfig::default());
    };
    debug!("using config {}", path.display());

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

fn find_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            return None;
        }
        current = dir.parent();
    }
    None
}
