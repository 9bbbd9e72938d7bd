use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the JSON list of trip possibilities is written. Relative paths resolve
    /// against the working directory. Default is `testResponse.json`.
    pub output_file: PathBuf,
    /// Pretty-print the JSON response (two-space indent). Default is `true`.
    pub pretty: bool,
    /// chrono format used when dates are shown in the terminal.
    pub date_format: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    output_file: Option<PathBuf>,
    pretty: Option<bool>,
    date_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    /// An unreadable or malformed file is reported and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            warn!("ignoring config file: {error:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            output_file: file_config
                .output_file
                .unwrap_or_else(|| PathBuf::from("testResponse.json")),
            pretty: file_config.pretty.unwrap_or(true),
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%a, %d %b %Y".to_string()),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("tripdates")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("tripdates").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
