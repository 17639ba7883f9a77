//! Configuration for netlab
//!
//! Configuration is read from `config.toml` in the netlab config directory
//! (`$NETLAB_CONFIG_DIR`, or `<config dir>/netlab`), or from an explicit path.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NetlabError, Result};

pub use types::{DistanceVectorConfig, LayoutConfig, NetlabConfig};

const CONFIG_DIR: &str = "netlab";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NETLAB_CONFIG_DIR";

impl NetlabConfig {
    /// Location of the default configuration file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    NetlabError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NetlabConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default location when present.
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(NetlabError::not_found("config file", path.display()));
            }
            return Self::load(path);
        }

        let Ok(path) = Self::default_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as the TOML written by [`save`](Self::save)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NetlabError::Other(format!("failed to serialize config: {}", e)))
    }

    fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if !(layout.width > 0.0 && layout.height > 0.0) {
            crate::bail_invalid!(
                "layout size",
                format!("{}x{}", layout.width, layout.height)
            );
        }
        if !(layout.radius_factor > 0.0 && layout.radius_factor <= 1.0) {
            crate::bail_invalid!("layout radius_factor", layout.radius_factor);
        }
        if self.distance_vector.max_rounds == 0 {
            crate::bail_invalid!("distance_vector max_rounds", 0);
        }
        Ok(())
    }
}
