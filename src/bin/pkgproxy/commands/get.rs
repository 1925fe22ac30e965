//! `pkgproxy get` command
//!
//! Serves from the hosted index first, then through the upstream proxy when
//! one is configured.

use std::io::Write;

use anyhow::{bail, Context, Result};

use crate::cli::GetArgs;
use pkgproxy::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: GetArgs) -> Result<()> {
    let service = ctx.service()?;

    let Some(content) = service
        .get_package_content(&args.name, &args.version)
        .with_context(|| format!("failed to get {} {}", args.name, args.version))?
    else {
        bail!("package `{}` version `{}` not found", args.name, args.version);
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("failed to write file: {}", path.display()))?;
            eprintln!("       Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&content)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
