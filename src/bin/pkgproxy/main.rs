//! pkgproxy CLI - a local cache of source-distribution archives

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use pkgproxy::GlobalContext;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let Cli {
        verbose,
        config,
        offline,
        command,
    } = Cli::parse();

    // Set up logging
    let filter = if verbose {
        EnvFilter::new("pkgproxy=debug")
    } else {
        EnvFilter::new("pkgproxy=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let context = || load_context(config.as_deref(), offline);

    // Execute command
    match command {
        Commands::Upload(args) => commands::upload::execute(&context()?, args),
        Commands::Get(args) => commands::get::execute(&context()?, args),
        Commands::List => commands::list::execute(&context()?),
        Commands::Versions(args) => commands::versions::execute(&context()?, args),
        Commands::Stats(args) => commands::stats::execute(&context()?, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Load the global context from `--config` or the default location.
fn load_context(config: Option<&Path>, offline: bool) -> Result<GlobalContext> {
    let mut ctx = match config {
        Some(path) => GlobalContext::with_config_path(path.to_path_buf())?,
        None => GlobalContext::new()?,
    };
    if offline {
        ctx.config_mut().net.offline = true;
    }
    Ok(ctx)
}
