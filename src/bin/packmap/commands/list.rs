//! `packmap list` command

use anyhow::Result;
use serde::Serialize;

use crate::cli::ListArgs;
use crate::commands::Context;
use packmap::ops::load_package_map;

#[derive(Serialize)]
struct Entry<'a> {
    name: &'a str,
    location: &'a str,
}

pub fn execute(ctx: &Context, args: ListArgs) -> Result<()> {
    let map = load_package_map(&ctx.packages_file)?;

    if args.json {
        let entries: Vec<Entry<'_>> = map
            .iter()
            .map(|(name, location)| Entry {
                name,
                location: location.as_str(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if args.names {
        for name in map.names() {
            println!("{}", name);
        }
    } else {
        print!("{}", map);
    }

    Ok(())
}
