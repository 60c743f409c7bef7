use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

pub const CONFIG_FILE: &str = "demo-ci.toml";
pub const DEFAULT_OUT_DIR: &str = "dist";
pub const DEFAULT_FILE_NAME: &str = "index.html";
pub const DEFAULT_FAIL_ENV: &str = "FAIL_BUILD";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Destination directory, relative to the working directory.
    pub out_dir: PathBuf,
    pub file_name: String,
    /// Name of the failure-injection environment variable.
    pub fail_env: String,
    /// Fixed RNG seed. Seeded from the clock when unset.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: DEFAULT_FILE_NAME.to_owned(),
            fail_env: DEFAULT_FAIL_ENV.to_owned(),
            seed: None,
        }
    }
}

impl Config {
    /// Load from an explicit path, which must exist, or from `demo-ci.toml`
    /// in the working directory when present. Falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                Self::from_file(path)
            }
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    debug!("no {CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.file_name.trim().is_empty() {
            bail!("file_name must not be empty");
        }
        if config.fail_env.trim().is_empty() {
            bail!("fail_env must not be empty");
        }
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, out_dir: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(out_dir) = out_dir {
            self.out_dir = out_dir;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }
}
