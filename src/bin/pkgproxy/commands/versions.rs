//! `pkgproxy versions` command

use anyhow::Result;

use crate::cli::VersionsArgs;
use pkgproxy::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: VersionsArgs) -> Result<()> {
    let service = ctx.service()?;

    for version in service.list_versions(&args.name)? {
        println!("{}", version?);
    }

    Ok(())
}
