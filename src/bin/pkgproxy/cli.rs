//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// pkgproxy - a local cache of source-distribution archives
#[derive(Parser)]
#[command(name = "pkgproxy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(long, global = true, env = "PKGPROXY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Never contact the upstream repository
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an archive to the hosted index
    Upload(UploadArgs),

    /// Get the archive for a package version
    Get(GetArgs),

    /// List hosted package names
    List,

    /// List hosted versions of a package
    Versions(VersionsArgs),

    /// Show hosted index statistics
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct UploadArgs {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,

    /// Archive file to upload
    pub file: PathBuf,
}

#[derive(Args)]
pub struct GetArgs {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,

    /// Write the archive here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct VersionsArgs {
    /// Package name
    pub name: String,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
