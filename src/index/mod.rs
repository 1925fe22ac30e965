//! Package indexes.
//!
//! An index maps a package name and version to a stored source archive.
//!
//! - [`LocalIndex`] serves the `*.tar.gz` files of one directory.
//! - [`ReadThroughIndex`] wraps a `LocalIndex` and downloads missing archives
//!   from an upstream repository before serving them.
//!
//! Both implement [`PackageIndex`], the read surface the serving layer uses.

pub mod error;
pub mod fetch;
pub mod local;
pub mod proxy;

pub use error::{FetchError, IndexError};
pub use fetch::{Fetcher, HttpFetcher};
pub use local::{LocalIndex, PackageScan, Versions, ANY_VERSION};
pub use proxy::ReadThroughIndex;

use crate::util::dedup::Dedup;

/// Distinct package names in ascending order.
pub type PackageNames = Dedup<std::vec::IntoIter<String>>;

/// Read operations shared by all package indexes.
pub trait PackageIndex {
    /// Get the index name for display.
    fn name(&self) -> &str;

    /// Get the archive bytes for a package version.
    ///
    /// Returns `Ok(None)` when the archive is not available.
    fn get_package_content(&self, name: &str, version: &str) -> Result<Option<Vec<u8>>, IndexError>;

    /// List the versions stored for a package, in unspecified order.
    fn list_versions(&self, name: &str) -> Result<Versions, IndexError>;

    /// List every package name once, sorted.
    fn list_available_package_names(&self) -> Result<PackageNames, IndexError>;
}
