//! `pkgproxy upload` command

use anyhow::{Context, Result};

use crate::cli::UploadArgs;
use pkgproxy::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: UploadArgs) -> Result<()> {
    let content = std::fs::read(&args.file)
        .with_context(|| format!("failed to read archive: {}", args.file.display()))?;

    let service = ctx.service()?;
    service
        .upload_package(&args.name, &args.version, &content)
        .with_context(|| format!("failed to upload {} {}", args.name, args.version))?;

    eprintln!("    Uploaded {} {} ({} bytes)", args.name, args.version, content.len());

    Ok(())
}
