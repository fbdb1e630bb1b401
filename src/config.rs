use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

pub const DEFAULT_API_BASE: &str = "https://swapi.dev/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_base: Option<String>,
    request_timeout_secs: Option<u64>,
}

pub fn load_config() -> AppConfig {
    load_config_from(&PathBuf::from("config.json"))
}

pub fn load_config_from(cfg_path: &Path) -> AppConfig {
    let mut cfg = AppConfig::default();

    match fs::read_to_string(cfg_path) {
        Ok(raw) => match serde_json::from_str::<RawConfig>(&raw) {
            Ok(parsed) => {
                if let Some(base) = parsed.api_base {
                    // Trailing slash would double up when joining endpoint paths
                    cfg.api_base = base.trim_end_matches('/').to_string();
                }
                if let Some(secs) = parsed.request_timeout_secs {
                    cfg.request_timeout_secs = secs.clamp(1, 300);
                }
                info!("Loaded config from {}", cfg_path.display());
            }
            Err(err) => {
                warn!("Failed to parse {} ({}). Using defaults.", cfg_path.display(), err);
            }
        },
        Err(_) => {
            info!("No {} found; using defaults", cfg_path.display());
        }
    }

    cfg
}
