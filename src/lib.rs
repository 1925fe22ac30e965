//! pkgproxy - a local cache of source-distribution archives
//!
//! This crate provides the package indexes behind pkgproxy: a directory-backed
//! index of `<name>-<version>.tar.gz` archives and a read-through variant that
//! downloads missing archives from an upstream repository.

pub mod core;
pub mod index;
pub mod ops;
pub mod util;

/// Test utilities and mocks for pkgproxy unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides a mock upstream fetcher and index directory fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::PackageRef;
pub use index::{IndexError, LocalIndex, PackageIndex, ReadThroughIndex};
pub use ops::{PackageService, PackageStatistics};
pub use util::context::GlobalContext;
