use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use twenty48_engine::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Session settings loadable from TOML. Every key is optional.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SessionConfig {
    #[serde(default = "defaults::width")]
    pub width: usize,
    #[serde(default = "defaults::height")]
    pub height: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Starting board file; when set, its shape wins over width/height.
    #[serde(default)]
    pub board: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: defaults::width(),
            height: defaults::height(),
            seed: None,
            board: None,
        }
    }
}

impl SessionConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("failed to open config {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let cfg: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(cfg)
    }
}

mod defaults {
    pub fn width() -> usize { super::DEFAULT_WIDTH }
    pub fn height() -> usize { super::DEFAULT_HEIGHT }
}
