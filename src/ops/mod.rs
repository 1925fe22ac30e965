//! High-level operations.
//!
//! This module contains the service layer the pkgproxy commands run on.

pub mod service;

pub use service::{PackageService, PackageStatistics};
