//! `packmap relativize` command

use anyhow::Result;

use crate::cli::RelativizeArgs;
use packmap::ops::relativize_location;

pub fn execute(args: RelativizeArgs) -> Result<()> {
    let relative = relativize_location(&args.location, &args.base)?;
    println!("{}", relative);
    Ok(())
}
