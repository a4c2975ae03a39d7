//! `packmap resolve` command

use anyhow::Result;

use crate::cli::ResolveArgs;
use crate::commands::Context;
use packmap::ops::{load_package_map, resolve_references};

pub fn execute(ctx: &Context, args: ResolveArgs) -> Result<()> {
    let map = load_package_map(&ctx.packages_file)?;

    for location in resolve_references(&map, &args.references)? {
        println!("{}", location);
    }

    Ok(())
}
