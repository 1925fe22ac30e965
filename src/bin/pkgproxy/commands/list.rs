//! `pkgproxy list` command

use anyhow::Result;

use pkgproxy::{GlobalContext, PackageIndex};

pub fn execute(ctx: &GlobalContext) -> Result<()> {
    let index = ctx.hosted_index()?;

    for name in index.list_available_package_names()? {
        println!("{}", name);
    }

    Ok(())
}
