//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// packmap - resolve `package:` references through a package mapping file
#[derive(Parser)]
#[command(name = "packmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Package mapping file (defaults to config `packages_file`, then .packages)
    #[arg(short, long, global = true, env = "PACKMAP_PACKAGES")]
    pub packages: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve references to concrete locations
    Resolve(ResolveArgs),

    /// List every package and its location
    List(ListArgs),

    /// Express a location relative to a base location
    Relativize(RelativizeArgs),

    /// Write the mapping file back out
    Rewrite(RewriteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// References to resolve (e.g. package:foo/bar.txt)
    #[arg(required = true)]
    pub references: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Print package names only
    #[arg(long, conflicts_with = "json")]
    pub names: bool,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RelativizeArgs {
    /// Absolute location to relativize
    pub location: String,

    /// Absolute base location
    #[arg(long)]
    pub base: String,
}

#[derive(Args)]
pub struct RewriteArgs {
    /// Write absolute locations instead of relative ones
    #[arg(long)]
    pub absolute: bool,

    /// Comment block to write instead of the generated header
    #[arg(long)]
    pub comment: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
