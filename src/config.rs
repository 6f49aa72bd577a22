use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub tree: TreeConfig,
    pub render: RenderConfig,
    pub share: ShareConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port of the resource tree server
    pub port: u16,
    /// `Cache-Control: max-age` for resource tree responses, in seconds
    pub cache_max_age: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Directory whose contents are listed
    pub root: PathBuf,
    /// URL prefix under which files are served
    pub base_url: String,
    /// List entries starting with `.`
    pub show_hidden: bool,
    /// Maximum directory depth to scan
    pub max_depth: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum nesting rendered before subtrees are cut off
    pub max_depth: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Port of the single-file share server
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cache_max_age: 1800,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            base_url: "/api/video".to_string(),
            show_hidden: false,
            max_depth: 32,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: crate::render::DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self { port: 1130 }
    }
}

impl Config {
    /// Default config file location (`~/.config/raindrop/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("raindrop").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// if present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 || self.share.port == 0 {
            return Err(ConfigError::Invalid("port must be between 1 and 65535".into()));
        }
        if self.render.max_depth == 0 {
            return Err(ConfigError::Invalid("render.max_depth must be at least 1".into()));
        }
        if self.tree.max_depth == 0 {
            return Err(ConfigError::Invalid("tree.max_depth must be at least 1".into()));
        }
        if !self.tree.base_url.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "tree.base_url must start with '/', got '{}'",
                self.tree.base_url
            )));
        }
        Ok(())
    }
}
