use anyhow::{Context, Result, bail};
use ceyal_providers::CsvOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How event-log files are read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Single-byte field separator
    pub delimiter: String,
    pub trim: bool,
    pub has_header: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            trim: true,
            has_header: true,
        }
    }
}

impl CsvConfig {
    pub fn to_options(&self) -> Result<CsvOptions> {
        let delimiter = match self.delimiter.as_bytes() {
            [byte] => *byte,
            _ => bail!(
                "csv.delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ),
        };

        Ok(CsvOptions {
            delimiter,
            trim: self.trim,
            has_header: self.has_header,
        })
    }
}

/// Analysis defaults applied when the command line does not override them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sort records by timestamp before analysis (logs are analyzed in file order otherwise)
    pub sort_chronologically: bool,
    /// Process to check conformance against when `--expected-process` is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_process: Option<String>,
}

/// Main configuration for ceyal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub csv: CsvConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Load config from `explicit` if given, otherwise from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("config file not found: {}", path.display());
                }
                Self::load_from(path)
            }
            None => Self::load_from(&Self::default_path()?),
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.ceyal/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        Ok(PathBuf::from(home).join(".ceyal").join("config.toml"))
    }
}
