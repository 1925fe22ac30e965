//! Command implementations

pub mod completions;
pub mod get;
pub mod list;
pub mod stats;
pub mod upload;
pub mod versions;
