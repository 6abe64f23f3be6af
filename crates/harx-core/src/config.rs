use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::extract::{ExtractOptions, OnError};
use crate::url_model::{EmptyFilenamePolicy, DEFAULT_FALLBACK_FILENAME};

/// Output directory used when neither config nor `--dir` names one.
pub const DEFAULT_OUTPUT_DIR: &str = "content";

/// Defaults loaded from `~/.config/harx/config.toml`. CLI flags override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarxConfig {
    /// Directory that receives extracted bodies.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Keep extracting after an entry fails instead of stopping.
    #[serde(default)]
    pub keep_going: bool,
    /// "fallback" (default), "skip" or "error" for URLs whose path ends in `/`.
    #[serde(default)]
    pub empty_filename: EmptyFilenamePolicy,
    /// Name used by the "fallback" policy.
    #[serde(default = "default_fallback_filename")]
    pub fallback_filename: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_fallback_filename() -> String {
    DEFAULT_FALLBACK_FILENAME.to_string()
}

impl Default for HarxConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            keep_going: false,
            empty_filename: EmptyFilenamePolicy::default(),
            fallback_filename: default_fallback_filename(),
        }
    }
}

impl HarxConfig {
    /// Extractor options as configured, before any CLI override.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            output_dir: self.output_dir.clone(),
            on_error: if self.keep_going {
                OnError::Continue
            } else {
                OnError::Abort
            },
            empty_filename: self.empty_filename,
            fallback_filename: self.fallback_filename.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HarxConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
