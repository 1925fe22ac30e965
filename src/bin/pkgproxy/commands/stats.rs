//! `pkgproxy stats` command

use anyhow::Result;

use crate::cli::StatsArgs;
use pkgproxy::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: StatsArgs) -> Result<()> {
    let stats = ctx.service()?.get_package_statistics()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Package files: {}", stats.package_files);
        println!("Unique names:  {}", stats.unique_names);
    }

    Ok(())
}
