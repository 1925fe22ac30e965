//! Package service.
//!
//! The entry points a serving layer calls: uploads and listings go to the
//! hosted index, downloads fall back to the read-through index when one is
//! configured.

use serde::Serialize;

use crate::index::{
    Fetcher, HttpFetcher, IndexError, LocalIndex, PackageIndex, PackageNames, ReadThroughIndex,
    Versions,
};

/// Summary numbers for the hosted index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageStatistics {
    /// Number of archive files
    pub package_files: usize,

    /// Number of distinct package names
    pub unique_names: usize,
}

/// Package operations over a hosted index and an optional upstream proxy.
#[derive(Debug)]
pub struct PackageService<F = HttpFetcher> {
    hosted: LocalIndex,
    proxy: Option<ReadThroughIndex<F>>,
}

impl<F: Fetcher> PackageService<F> {
    /// Create a service serving only the hosted index.
    pub fn new(hosted: LocalIndex) -> Self {
        PackageService {
            hosted,
            proxy: None,
        }
    }

    /// Serve packages missing from the hosted index through `proxy`.
    pub fn with_proxy(mut self, proxy: ReadThroughIndex<F>) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn hosted(&self) -> &LocalIndex {
        &self.hosted
    }

    pub fn proxy(&self) -> Option<&ReadThroughIndex<F>> {
        self.proxy.as_ref()
    }

    pub fn get_package_statistics(&self) -> Result<PackageStatistics, IndexError> {
        let package_files = self.hosted.count_packages()?;
        let unique_names = self.hosted.list_available_package_names()?.count();

        Ok(PackageStatistics {
            package_files,
            unique_names,
        })
    }

    pub fn list_available_package_names(&self) -> Result<PackageNames, IndexError> {
        self.hosted.list_available_package_names()
    }

    pub fn list_versions(&self, name: &str) -> Result<Versions, IndexError> {
        self.hosted.list_versions(name)
    }

    /// Get archive content from the hosted index, then from the proxy.
    pub fn get_package_content(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Option<Vec<u8>>, IndexError> {
        if let Some(content) = self.hosted.get_package_content(name, version)? {
            return Ok(Some(content));
        }

        match &self.proxy {
            Some(proxy) => proxy.get_package_content(name, version),
            None => Ok(None),
        }
    }

    pub fn upload_package(&self, name: &str, version: &str, content: &[u8]) -> Result<(), IndexError> {
        self.hosted.add_package(name, version, content)
    }
}
