//! Core data structures for pkgproxy.
//!
//! Package references and the archive filename convention they are
//! decomposed from.

pub mod package_ref;

pub use package_ref::{archive_filename, guess_name_and_version, PackageRef, ARCHIVE_SUFFIX};
