//! `packmap rewrite` operation.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use url::Url;

use crate::core::PackageMap;
use crate::mapping::WriteOptions;
use crate::ops::load_package_map;
use crate::util::fs::{parent_directory_url, write_string};

/// Options for rewriting a mapping file.
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// Write locations relative to the output file's directory
    pub relative: bool,
    /// Comment block to write instead of the generated header
    pub comment: Option<String>,
    /// Destination file (None = stdout)
    pub output: Option<PathBuf>,
}

/// Write `map` to `sink`, relative to `base` when given.
pub fn rewrite_package_map<W: Write>(
    map: &PackageMap,
    sink: &mut W,
    base: Option<&Url>,
    comment: Option<&str>,
) -> Result<()> {
    let options = WriteOptions { base, comment };
    map.write(sink, &options)
        .context("failed to write package map")?;
    Ok(())
}

/// Re-emit the mapping file at `packages_file`.
pub fn rewrite(packages_file: &Path, opts: &RewriteOptions) -> Result<()> {
    let map = load_package_map(packages_file)?;

    let target = opts.output.as_deref().unwrap_or(packages_file);
    let base = if opts.relative {
        Some(parent_directory_url(target)?)
    } else {
        None
    };

    let mut buffer = Vec::new();
    rewrite_package_map(&map, &mut buffer, base.as_ref(), opts.comment.as_deref())?;

    match &opts.output {
        Some(path) => {
            // Only UTF-8 is ever written
            write_string(path, &String::from_utf8_lossy(&buffer))?;
            tracing::info!("wrote {} packages to {}", map.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&buffer)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
