//! Read-through package index.
//!
//! On a cache miss the archive is downloaded from
//! `<upstream>/packages/source/<first letter>/<name>/<name>-<version>.tar.gz`
//! and stored in the wrapped [`LocalIndex`] before it is returned. Listing
//! only ever reflects what is cached locally; the upstream catalog is never
//! enumerated.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::core::package_ref::archive_filename;
use crate::index::{
    Fetcher, HttpFetcher, IndexError, LocalIndex, PackageIndex, PackageNames, Versions,
    ANY_VERSION,
};

/// A [`LocalIndex`] that fills itself from an upstream repository.
#[derive(Debug)]
pub struct ReadThroughIndex<F = HttpFetcher> {
    /// Local cache of downloaded archives
    index: LocalIndex,

    /// Base URL of the upstream repository
    upstream: Url,

    fetcher: F,
}

impl ReadThroughIndex<HttpFetcher> {
    /// Create a read-through index caching into `directory`.
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
        upstream: Url,
        timeout: Option<Duration>,
    ) -> Result<Self, IndexError> {
        let fetcher = HttpFetcher::with_timeout(timeout).map_err(|source| {
            IndexError::UpstreamFetch {
                url: upstream.to_string(),
                source,
            }
        })?;

        Self::with_fetcher(LocalIndex::new(name, directory)?, upstream, fetcher)
    }
}

impl<F: Fetcher> ReadThroughIndex<F> {
    /// Wrap an existing local index with a custom fetcher.
    pub fn with_fetcher(index: LocalIndex, upstream: Url, fetcher: F) -> Result<Self, IndexError> {
        if upstream.cannot_be_a_base() {
            return Err(IndexError::InvalidUpstream {
                url: upstream.to_string(),
            });
        }

        Ok(ReadThroughIndex {
            index,
            upstream,
            fetcher,
        })
    }

    /// Get the wrapped local index.
    pub fn local_index(&self) -> &LocalIndex {
        &self.index
    }

    /// Get the upstream base URL.
    pub fn upstream_url(&self) -> &Url {
        &self.upstream
    }

    /// Compute the upstream download URL for a package version.
    pub fn package_url(&self, name: &str, version: &str) -> Result<Url, IndexError> {
        let filename = archive_filename(name, version);

        let first = name
            .chars()
            .next()
            .ok_or_else(|| IndexError::invalid_filename(filename.clone()))?
            .to_string();

        let mut url = self.upstream.clone();
        url.path_segments_mut()
            .map_err(|_| IndexError::InvalidUpstream {
                url: self.upstream.to_string(),
            })?
            .pop_if_empty()
            .extend(["packages", "source", first.as_str(), name, filename.as_str()]);

        Ok(url)
    }
}

impl<F: Fetcher> PackageIndex for ReadThroughIndex<F> {
    fn name(&self) -> &str {
        self.index.name()
    }

    /// Serve a package, downloading it first if it is not cached.
    ///
    /// Download failures propagate as [`IndexError::UpstreamFetch`] and leave
    /// the cache untouched. The wildcard version names no single archive and
    /// is rejected without contacting the upstream.
    fn get_package_content(&self, name: &str, version: &str) -> Result<Option<Vec<u8>>, IndexError> {
        if version == ANY_VERSION {
            return Err(IndexError::invalid_filename(archive_filename(name, version)));
        }

        if self.index.contains(name, version) {
            tracing::debug!("Serving '{} {}' from '{}'", name, version, self.index.name());
            return self.index.get_package_content(name, version);
        }

        let url = self.package_url(name, version)?;
        tracing::info!("Fetching package '{} {}' from {}", name, version, url);

        let content = self
            .fetcher
            .fetch(&url)
            .map_err(|source| IndexError::UpstreamFetch {
                url: url.to_string(),
                source,
            })?;

        self.index.add_package(name, version, &content)?;

        Ok(Some(content))
    }

    fn list_versions(&self, name: &str) -> Result<Versions, IndexError> {
        self.index.list_versions(name)
    }

    fn list_available_package_names(&self) -> Result<PackageNames, IndexError> {
        Err(IndexError::NotImplemented {
            operation: "list_available_package_names",
        })
    }
}
