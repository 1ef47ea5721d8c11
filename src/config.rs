use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use geist_blocks::BlockFilter;
use serde::Deserialize;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "geist-scan.toml";

#[derive(Clone, Debug, Deserialize)]
pub struct ScanConfig {
    /// World save folder; must contain a `region` subfolder.
    #[serde(default = "default_world")]
    pub world: PathBuf,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub scan: BlockFilter,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            world: default_world(),
            output: Output::default(),
            scan: BlockFilter::default(),
        }
    }
}

fn default_world() -> PathBuf {
    PathBuf::from("minecraft_saves/cs2_test")
}

#[derive(Clone, Debug, Deserialize)]
pub struct Output {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_output_prefix")]
    pub prefix: String,
    /// Multiplier applied to every exported coordinate.
    #[serde(default = "default_scale")]
    pub scale: i64,
    #[serde(default = "default_preview")]
    pub preview: usize,
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_output_prefix() -> String {
    "minecraft_out_".to_string()
}
fn default_scale() -> i64 {
    48
}
fn default_preview() -> usize {
    5
}
impl Default for Output {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            prefix: default_output_prefix(),
            scale: default_scale(),
            preview: default_preview(),
        }
    }
}

impl ScanConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ScanConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    ScanConfig::from_toml_str(&s)
}

/// Explicit path: errors are fatal. Otherwise the default file is optional and a
/// broken one only produces a warning.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ScanConfig, Box<dyn Error>> {
    if let Some(path) = explicit {
        let cfg = load_config_from_path(path)?;
        log::info!("config loaded from {}", path.display());
        return Ok(cfg);
    }
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(ScanConfig::default());
    }
    match load_config_from_path(path) {
        Ok(cfg) => {
            log::info!("config loaded from {}", path.display());
            Ok(cfg)
        }
        Err(e) => {
            log::warn!("{} parse error: {}; using defaults", DEFAULT_CONFIG_FILE, e);
            Ok(ScanConfig::default())
        }
    }
}
