//! Directory-backed package index.
//!
//! A `LocalIndex` owns every `*.tar.gz` file directly inside its directory.
//! There is no in-memory state besides the path: each query re-scans the
//! directory, so files added by another index over the same directory are
//! visible immediately.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{glob, Pattern};

use crate::core::package_ref::{archive_filename, ARCHIVE_SUFFIX};
use crate::core::PackageRef;
use crate::index::{IndexError, PackageIndex, PackageNames};
use crate::util::dedup::DedupExt;
use crate::util::fs::{ensure_dir, read_if_exists, write_atomic};

/// Version token matching any version in [`LocalIndex::contains`].
pub const ANY_VERSION: &str = "*";

/// A package index serving archives from a single directory.
#[derive(Debug, Clone)]
pub struct LocalIndex {
    /// Display name, used in logs only
    name: String,

    /// Directory holding the archives
    directory: PathBuf,
}

impl LocalIndex {
    /// Open the index, creating the directory (and its parents) if missing.
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Result<Self, IndexError> {
        let name = name.into();
        let directory = directory.into();

        tracing::info!(
            "Creating package index '{}' serving directory '{}'",
            name,
            directory.display()
        );

        ensure_dir(&directory).map_err(|e| IndexError::io(&directory, e))?;

        Ok(LocalIndex { name, directory })
    }

    /// Get the directory this index serves.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Store an archive, replacing any existing archive for the same
    /// name and version.
    pub fn add_package(&self, name: &str, version: &str, content: &[u8]) -> Result<(), IndexError> {
        let path = self.package_path(name, version);

        tracing::info!(
            "Adding package '{} {}' to file '{}'",
            name,
            version,
            path.display()
        );

        write_atomic(&path, content).map_err(|e| IndexError::io(&path, e))
    }

    /// Check whether an archive exists.
    ///
    /// Passing [`ANY_VERSION`] matches `<name>-*.tar.gz`. Like any glob over
    /// the filename, this also matches archives of names that start with
    /// `<name>-`.
    pub fn contains(&self, name: &str, version: &str) -> bool {
        if version != ANY_VERSION {
            return self.package_path(name, version).is_file();
        }

        let dir = Pattern::escape(&self.directory.to_string_lossy());
        let pattern = Path::new(&dir).join(format!("{}-*{}", Pattern::escape(name), ARCHIVE_SUFFIX));
        let pattern_str = pattern.to_string_lossy();

        match glob(&pattern_str) {
            Ok(mut paths) => paths.any(|entry| entry.map(|p| p.is_file()).unwrap_or(false)),
            Err(e) => {
                tracing::warn!("invalid glob pattern '{}': {}", pattern_str, e);
                false
            }
        }
    }

    /// Count the archives in the directory.
    ///
    /// Every archive must decompose into a name and version; the first one
    /// that does not aborts the count.
    pub fn count_packages(&self) -> Result<usize, IndexError> {
        self.packages()?.map(|pkg| pkg.map(|_| 1usize)).sum()
    }

    /// Scan the directory for archives.
    pub fn packages(&self) -> Result<PackageScan, IndexError> {
        tracing::debug!(
            "Scanning package index '{}' at {}",
            self.name,
            self.directory.display()
        );

        let entries =
            fs::read_dir(&self.directory).map_err(|e| IndexError::io(&self.directory, e))?;

        Ok(PackageScan {
            entries,
            directory: self.directory.clone(),
        })
    }

    fn package_path(&self, name: &str, version: &str) -> PathBuf {
        self.directory.join(archive_filename(name, version))
    }
}

impl PackageIndex for LocalIndex {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_package_content(&self, name: &str, version: &str) -> Result<Option<Vec<u8>>, IndexError> {
        let path = self.package_path(name, version);
        read_if_exists(&path).map_err(|e| IndexError::io(&path, e))
    }

    fn list_versions(&self, name: &str) -> Result<Versions, IndexError> {
        tracing::info!("Listing versions for '{}'", name);

        Ok(Versions {
            scan: self.packages()?,
            name: name.to_string(),
        })
    }

    fn list_available_package_names(&self) -> Result<PackageNames, IndexError> {
        let mut names = self
            .packages()?
            .map(|pkg| pkg.map(|p| p.into_parts().0))
            .collect::<Result<Vec<_>, _>>()?;

        names.sort();

        Ok(names.into_iter().dedup_adjacent())
    }
}

/// Iterator over the archives in an index directory, in directory order.
///
/// Entries that are not `*.tar.gz` files are skipped. An archive whose
/// filename cannot be decomposed yields [`IndexError::InvalidFilename`].
#[derive(Debug)]
pub struct PackageScan {
    entries: fs::ReadDir,
    directory: PathBuf,
}

impl Iterator for PackageScan {
    type Item = Result<PackageRef, IndexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(IndexError::io(&self.directory, e))),
            };

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                let lossy = file_name.to_string_lossy();
                if lossy.ends_with(ARCHIVE_SUFFIX) {
                    return Some(Err(IndexError::invalid_filename(lossy)));
                }
                continue;
            };

            if !file_name.ends_with(ARCHIVE_SUFFIX) || !entry.path().is_file() {
                continue;
            }

            return Some(PackageRef::from_filename(file_name));
        }
    }
}

/// Versions of a single package, in directory order.
///
/// The order depends on the filesystem and is not sorted.
#[derive(Debug)]
pub struct Versions {
    scan: PackageScan,
    name: String,
}

impl Iterator for Versions {
    type Item = Result<String, IndexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.scan.next()? {
                Ok(pkg) if pkg.name() == self.name => return Some(Ok(pkg.into_parts().1)),
                Ok(_) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
