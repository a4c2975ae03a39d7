//! `packmap rewrite` command

use anyhow::Result;

use crate::cli::RewriteArgs;
use crate::commands::Context;
use packmap::ops::{rewrite, RewriteOptions};

pub fn execute(ctx: &Context, args: RewriteArgs) -> Result<()> {
    let opts = RewriteOptions {
        relative: !args.absolute && ctx.config.write_relative(),
        comment: args.comment.or_else(|| ctx.config.write.comment.clone()),
        output: args.output,
    };

    rewrite(&ctx.packages_file, &opts)
}
