//! Configuration file support for pkgproxy.
//!
//! ```toml
//! [hosted]
//! name = "hosted"
//! directory = "packages/hosted"
//!
//! [proxy]
//! name = "pypi"
//! directory = "packages/pypi"
//! upstream_url = "https://pypi.python.org"
//!
//! [net]
//! timeout = 30
//! offline = false
//! ```
//!
//! Relative directories are resolved against the directory containing the
//! config file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

/// pkgproxy configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Index receiving uploads
    pub hosted: HostedConfig,

    /// Read-through index, if any
    pub proxy: Option<ProxyConfig>,

    /// Network settings
    pub net: NetConfig,
}

/// Hosted index settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostedConfig {
    /// Index name shown in logs
    pub name: String,

    /// Directory holding uploaded archives
    pub directory: PathBuf,
}

impl Default for HostedConfig {
    fn default() -> Self {
        HostedConfig {
            name: "hosted".to_string(),
            directory: PathBuf::from("packages").join("hosted"),
        }
    }
}

/// Read-through index settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// Index name shown in logs
    #[serde(default = "default_proxy_name")]
    pub name: String,

    /// Directory caching downloaded archives
    #[serde(default = "default_proxy_directory")]
    pub directory: PathBuf,

    /// Base URL of the upstream repository
    pub upstream_url: Url,
}

fn default_proxy_name() -> String {
    "pypi".to_string()
}

fn default_proxy_directory() -> PathBuf {
    PathBuf::from("packages").join("pypi")
}

/// Network-related configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// Upstream request timeout in seconds
    pub timeout: Option<u64>,

    /// Offline mode (never contact the upstream repository)
    pub offline: bool,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML content.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Make relative index directories absolute against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.hosted.directory.is_relative() {
            self.hosted.directory = base.join(&self.hosted.directory);
        }
        if let Some(proxy) = &mut self.proxy {
            if proxy.directory.is_relative() {
                proxy.directory = base.join(&proxy.directory);
            }
        }
    }

    /// Upstream request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.net.timeout.map(Duration::from_secs)
    }
}
