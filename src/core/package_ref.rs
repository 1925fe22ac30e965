//! Package references and archive filename inference.
//!
//! Archives are stored as `<name>-<version>.tar.gz`. Both parts are free-form,
//! so the split point has to be guessed:
//!
//! 1. Split at the last dash that is followed by a version-looking token
//!    (`[0-9.]+` and then anything) right before the suffix.
//! 2. Otherwise strip the suffix and split at the last dash.
//! 3. Without any dash the filename cannot be decomposed.
//!
//! Rule 2 means `spam-and-eggs.tar.gz` becomes `spam-and` / `eggs`. That is
//! the established behavior for archives without a numeric version and is
//! kept as is.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::index::IndexError;

/// Suffix shared by every archive in an index.
pub const ARCHIVE_SUFFIX: &str = ".tar.gz";

static NAME_AND_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)-([0-9.]+.*)\.tar\.gz$").expect("archive filename pattern is valid")
});

/// An immutable (name, version) pair decomposed from an archive filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageRef {
    name: String,
    version: String,
}

impl PackageRef {
    /// Decompose an archive filename into a package reference.
    pub fn from_filename(filename: &str) -> Result<Self, IndexError> {
        let (name, version) = guess_name_and_version(filename)?;
        Ok(PackageRef {
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The archive filename this reference was derived from.
    pub fn filename(&self) -> String {
        archive_filename(&self.name, &self.version)
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.version)
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Build the archive filename for a package.
pub fn archive_filename(name: &str, version: &str) -> String {
    format!("{}-{}{}", name, version, ARCHIVE_SUFFIX)
}

/// Guess the name and version encoded in an archive filename.
///
/// The returned slices borrow from `filename`.
pub fn guess_name_and_version(filename: &str) -> Result<(&str, &str), IndexError> {
    if let Some(caps) = NAME_AND_VERSION.captures(filename) {
        if let (Some(name), Some(version)) = (caps.get(1), caps.get(2)) {
            return Ok((name.as_str(), version.as_str()));
        }
    }

    let stem = filename.strip_suffix(ARCHIVE_SUFFIX).unwrap_or(filename);

    match stem.rfind('-') {
        Some(split) => Ok((&stem[..split], &stem[split + 1..])),
        None => Err(IndexError::invalid_filename(filename)),
    }
}
