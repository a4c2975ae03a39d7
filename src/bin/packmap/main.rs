//! packmap CLI - resolve `package:` references through a mapping file

use std::io::IsTerminal;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use packmap::mapping::{ArgumentError, FormatError};
use packmap::util::diagnostic::{emit, suggestions, Diagnostic};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    init_logging(cli.verbose);

    let ctx = match commands::Context::load(cli.packages) {
        Ok(ctx) => ctx,
        Err(e) => {
            report(&e, color, None);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&ctx, cli.command) {
        report(&e, color, Some(&ctx.packages_file));
        std::process::exit(1);
    }
}

/// Print `e` to stderr; format errors point into `packages_file`.
fn report(e: &anyhow::Error, color: bool, packages_file: Option<&Path>) {
    if let Some(format_error) = e.downcast_ref::<FormatError>() {
        eprintln!("error: {}", e);
        let mut diag = format_error.to_diagnostic();
        if let Some(path) = packages_file {
            diag = diag.with_location(path);
        }
        emit(&diag, color);
    } else if let Some(ArgumentError::UnknownPackage(_)) = e.downcast_ref::<ArgumentError>() {
        let diag = Diagnostic::error(format!("{:#}", e))
            .with_suggestion(suggestions::UNKNOWN_PACKAGE);
        emit(&diag, color);
    } else {
        eprintln!("error: {:#}", e);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("packmap=debug")
    } else {
        EnvFilter::new("packmap=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(ctx: &commands::Context, command: Commands) -> Result<()> {
    match command {
        Commands::Resolve(args) => commands::resolve::execute(ctx, args),
        Commands::List(args) => commands::list::execute(ctx, args),
        Commands::Relativize(args) => commands::relativize::execute(args),
        Commands::Rewrite(args) => commands::rewrite::execute(ctx, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
