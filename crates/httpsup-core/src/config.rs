use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/httpsup/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpsupConfig {
    /// Extra substrings that exempt a URL from upgrading, on top of the
    /// built-in loopback tokens (which are always present).
    #[serde(default)]
    pub extra_exempt_hosts: Vec<String>,
    /// Connect timeout for the curl transport, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout for the curl transport, in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpsupConfig {
    fn default() -> Self {
        Self {
            extra_exempt_hosts: Vec::new(),
            connect_timeout_secs: 30,
            timeout_secs: 300,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("httpsup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HttpsupConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HttpsupConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HttpsupConfig = toml::from_str(&data)?;
    Ok(cfg)
}
