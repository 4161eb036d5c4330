use crate::http::{HttpOptions, DEFAULT_USER_AGENT};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// API endpoint the resource identifier is appended to.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi-proxy.freecodecamp.rocks/api/pokemon/";

/// Global configuration loaded from `~/.config/dexfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DexfetchConfig {
    /// Base URL of the Pokémon endpoint (treated as a directory).
    pub api_base_url: String,
    /// Identifier (id or name) fetched when none is given on the command line.
    pub default_pokemon: String,
    /// Download front/back sprites after printing the record.
    pub download_sprites: bool,
    /// Directory sprites are written to (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout per request.
    pub timeout_secs: u64,
    /// Optional `User-Agent` override.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for DexfetchConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_pokemon: "1".to_string(),
            download_sprites: true,
            output_dir: None,
            connect_timeout_secs: 15,
            timeout_secs: 60,
            user_agent: None,
        }
    }
}

impl DexfetchConfig {
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dexfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DexfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DexfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DexfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
