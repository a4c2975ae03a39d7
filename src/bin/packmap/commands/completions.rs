//! `packmap completions` command

use std::io::{self, Write};

use anyhow::{Context as _, Result};
use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use packmap::util::fs::write_string;

pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let mut script = Vec::new();
    clap_complete::generate(args.shell, &mut cmd, "packmap", &mut script);

    match args.output {
        Some(path) => {
            let script = String::from_utf8(script).context("completion script is not UTF-8")?;
            write_string(&path, &script)?;
            tracing::info!("wrote {} completions to {}", args.shell, path.display());
        }
        None => io::stdout()
            .lock()
            .write_all(&script)
            .context("failed to write completions")?,
    }

    Ok(())
}
