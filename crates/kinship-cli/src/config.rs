//! CLI configuration

use std::path::{Path, PathBuf};

use kinship_core::limits::validate_cousin_degree;
use serde::{Deserialize, Serialize};

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kinship")
        .join("config.toml")
}

/// Configuration for the CLI, stored as TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GEDCOM file used when `--file` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,

    /// Output format used when `--format` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Cousin degree used when `cousins --degree` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cousin_degree: Option<u32>,
}

impl Config {
    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["default_file", "format", "cousin_degree"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_file" => self.default_file.as_ref().map(|p| p.display().to_string()),
            "format" => self.format.clone(),
            "cousin_degree" => self.cousin_degree.map(|d| d.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "default_file" => self.default_file = Some(PathBuf::from(value)),
            "format" => match value.to_lowercase().as_str() {
                "table" | "json" => self.format = Some(value.to_lowercase()),
                _ => anyhow::bail!("Unknown format '{}'. Expected table or json.", value),
            },
            "cousin_degree" => {
                let degree: u32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("cousin_degree must be a number, got '{}'", value))?;
                validate_cousin_degree(degree)?;
                self.cousin_degree = Some(degree);
            }
            _ => anyhow::bail!(
                "Unknown config key: {}. Available keys: {}",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}
