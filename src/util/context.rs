//! Global context for pkgproxy operations.
//!
//! Loads the configuration and builds the indexes from it. This is the only
//! place indexes are constructed; everything else receives them by value.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::index::{LocalIndex, ReadThroughIndex};
use crate::ops::PackageService;
use crate::util::config::Config;

static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("org", "pkgproxy", "pkgproxy"));

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Config file location (may not exist)
    config_path: PathBuf,

    /// Loaded configuration with resolved directories
    config: Config,
}

impl GlobalContext {
    /// Create a context from the default config location.
    ///
    /// A missing default config file means default settings, with index
    /// directories under the data directory.
    pub fn new() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            return Self::with_config_path(config_path);
        }

        let mut config = Config::default();
        config.resolve_paths(&Self::default_data_dir());
        Ok(GlobalContext {
            config_path,
            config,
        })
    }

    /// Create a context from an explicit config file, which must exist.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self> {
        let config = Config::load(&config_path)?;
        Ok(Self::from_config(config, config_path))
    }

    /// Create a context from an already loaded config.
    ///
    /// Relative directories are resolved against the config file's directory.
    pub fn from_config(mut config: Config, config_path: PathBuf) -> Self {
        let base = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        config.resolve_paths(&base);

        GlobalContext {
            config_path,
            config,
        }
    }

    /// Default config file, `<config dir>/config.toml`.
    pub fn default_config_path() -> PathBuf {
        let dir = match PROJECT_DIRS.as_ref() {
            Some(dirs) => dirs.config_dir().to_path_buf(),
            None => PathBuf::from(".pkgproxy"),
        };
        dir.join("config.toml")
    }

    /// Default base for index directories when no config file exists.
    pub fn default_data_dir() -> PathBuf {
        match PROJECT_DIRS.as_ref() {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => PathBuf::from(".pkgproxy"),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Open the hosted index.
    pub fn hosted_index(&self) -> Result<LocalIndex> {
        let hosted = &self.config.hosted;
        LocalIndex::new(hosted.name.clone(), hosted.directory.clone())
            .with_context(|| format!("failed to open package index '{}'", hosted.name))
    }

    /// Open the read-through index, unless none is configured or the
    /// context is offline.
    pub fn proxy_index(&self) -> Result<Option<ReadThroughIndex>> {
        let Some(proxy) = &self.config.proxy else {
            return Ok(None);
        };

        if self.config.net.offline {
            tracing::debug!("Offline mode, not using upstream {}", proxy.upstream_url);
            return Ok(None);
        }

        let index = ReadThroughIndex::new(
            proxy.name.clone(),
            proxy.directory.clone(),
            proxy.upstream_url.clone(),
            self.config.timeout(),
        )
        .with_context(|| format!("failed to open package index '{}'", proxy.name))?;

        Ok(Some(index))
    }

    /// Build the package service from the configured indexes.
    pub fn service(&self) -> Result<PackageService> {
        let service = PackageService::new(self.hosted_index()?);
        Ok(match self.proxy_index()? {
            Some(proxy) => service.with_proxy(proxy),
            None => service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::PackageIndex;
    use tempfile::TempDir;

    #[test]
    fn test_directories_relative_to_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(&config_path, "[hosted]\ndirectory = \"store\"\n").unwrap();

        let ctx = GlobalContext::with_config_path(config_path.clone()).unwrap();

        assert_eq!(ctx.config_path(), config_path.as_path());
        assert_eq!(ctx.config().hosted.directory, tmp.path().join("store"));
    }

    #[test]
    fn test_default_config_path_is_in_config_dir() {
        let path = GlobalContext::default_config_path();
        assert_eq!(path.file_name().unwrap(), "config.toml");

        if let Some(dirs) = PROJECT_DIRS.as_ref() {
            assert_eq!(path.parent().unwrap(), dirs.config_dir());
        }
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(GlobalContext::with_config_path(tmp.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_hosted_index_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let ctx = GlobalContext::from_config(Config::default(), tmp.path().join("config.toml"));

        let index = ctx.hosted_index().unwrap();

        assert_eq!(index.name(), "hosted");
        assert!(tmp.path().join("packages").join("hosted").is_dir());
    }

    #[test]
    fn test_no_proxy_by_default() {
        let tmp = TempDir::new().unwrap();
        let ctx = GlobalContext::from_config(Config::default(), tmp.path().join("config.toml"));

        assert!(ctx.proxy_index().unwrap().is_none());
        assert!(ctx.service().unwrap().proxy().is_none());
    }

    #[test]
    fn test_offline_disables_proxy() {
        let tmp = TempDir::new().unwrap();
        let config = Config::parse(
            "[proxy]\nupstream_url = \"https://pypi.example.com\"\n\n[net]\noffline = true\n",
        )
        .unwrap();
        let ctx = GlobalContext::from_config(config, tmp.path().join("config.toml"));

        assert!(ctx.proxy_index().unwrap().is_none());
    }

    #[test]
    fn test_proxy_index_from_config() {
        let tmp = TempDir::new().unwrap();
        let config =
            Config::parse("[proxy]\nupstream_url = \"https://pypi.example.com\"\n").unwrap();
        let ctx = GlobalContext::from_config(config, tmp.path().join("config.toml"));

        let proxy = ctx.proxy_index().unwrap().unwrap();

        assert_eq!(proxy.name(), "pypi");
        assert_eq!(proxy.upstream_url().as_str(), "https://pypi.example.com/");
        assert_eq!(
            proxy.local_index().directory(),
            tmp.path().join("packages").join("pypi").as_path()
        );
    }
}
