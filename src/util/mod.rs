//! Shared utilities

pub mod config;
pub mod context;
pub mod dedup;
pub mod fs;

pub use config::Config;
pub use context::GlobalContext;
pub use dedup::{Dedup, DedupExt};
