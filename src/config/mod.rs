//! @module "Configuration"
//! @summary "Project configuration loading and defaults"
//! @layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".annotation.config.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Parse result caching
    #[serde(default)]
    pub cache: CacheConfig,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            cache: CacheConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Cache file used for one type
    pub fn cache_path_for(&self, type_name: &str) -> PathBuf {
        self.cache.directory.join(format!("{}.cache.json", cache_file_stem(type_name)))
    }
}

/// Qualified names (`App\Models\User`, `app::models::User`) escaped to a
/// file-system safe stem. `_` doubles and other bytes become `_XX`, so
/// distinct names never share a file.
fn cache_file_stem(type_name: &str) -> String {
    let mut stem = String::new();
    for byte in type_name.trim().bytes() {
        match byte {
            b'_' => stem.push_str("__"),
            b if b.is_ascii_alphanumeric() || b == b'-' => stem.push(b as char),
            b => stem.push_str(&format!("_{:02X}", b)),
        }
    }
    stem
}

/// Parse result cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache parse results between runs
    #[serde(default)]
    pub enabled: bool,

    /// Directory holding one cache file per type
    #[serde(default = "default_cache_directory")]
    pub directory: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: default_cache_directory(),
        }
    }
}

fn default_cache_directory() -> PathBuf {
    PathBuf::from(".annotation-cache")
}

/// Output rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_true() -> bool {
    true
}
