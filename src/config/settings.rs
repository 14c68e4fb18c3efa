//! Settings structures for Daleel-RS configuration

use crate::matcher::MatchMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub search: SearchSettings,
    pub admin: AdminSettings,
    pub data: DataSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (DALEEL_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("DALEEL_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("DALEEL_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("DALEEL_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("DALEEL_ADMIN_USERNAME") {
            self.admin.username = val;
        }
        if let Ok(val) = std::env::var("DALEEL_ADMIN_PASSWORD") {
            self.admin.password = val;
        }
        if let Ok(val) = std::env::var("DALEEL_SEED_PATH") {
            self.data.seed_path = Some(PathBuf::from(val));
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed in responses
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Daleel".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Seconds a cached search bundle stays fresh
    pub cache_ttl_seconds: u64,
    /// Maximum number of cached search bundles
    pub cache_capacity: usize,
    /// How queries are interpreted when matching names
    pub match_mode: MatchMode,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: crate::DEFAULT_CACHE_TTL,
            cache_capacity: crate::DEFAULT_CACHE_CAPACITY,
            match_mode: MatchMode::Raw,
        }
    }
}

/// Admin panel credentials
///
/// A plain configured credential pair. Hardening (hashing, sessions,
/// rate limiting) is out of scope for this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    pub username: String,
    pub password: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

/// Catalog data settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Optional JSON file the in-memory store is seeded from at startup
    pub seed_path: Option<PathBuf>,
}
