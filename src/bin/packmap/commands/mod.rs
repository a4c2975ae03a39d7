//! Command implementations

pub mod completions;
pub mod list;
pub mod relativize;
pub mod resolve;
pub mod rewrite;

use std::path::PathBuf;

use anyhow::Result;

use packmap::util::config::{global_config_path, load_config, project_config_path, Config};

/// Settings shared by all commands.
pub struct Context {
    pub config: Config,
    pub packages_file: PathBuf,
}

impl Context {
    /// Load config and pick the mapping file, `--packages` winning over config.
    pub fn load(packages: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let global = global_config_path();
        let config = load_config(global.as_deref(), &project_config_path(&cwd));

        let packages_file = packages.unwrap_or_else(|| cwd.join(config.packages_file()));
        tracing::debug!("using package map {}", packages_file.display());

        Ok(Context {
            config,
            packages_file,
        })
    }
}
