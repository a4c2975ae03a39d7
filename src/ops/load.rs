//! Package map loading.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::PackageMap;
use crate::util::diagnostic::suggestions;
use crate::util::fs::{parent_directory_url, read_to_string};

/// Load the package map at `path`.
///
/// Relative locations in the file resolve against the file's own directory.
pub fn load_package_map(path: &Path) -> Result<PackageMap> {
    if !path.exists() {
        bail!(
            "package map not found: {}\nhelp: {}",
            path.display(),
            suggestions::NO_PACKAGES_FILE
        );
    }

    let text = read_to_string(path)?;
    let base = parent_directory_url(path)?;

    let map = PackageMap::parse(&text, &base)
        .with_context(|| format!("failed to parse package map: {}", path.display()))?;

    tracing::debug!("loaded {} packages from {}", map.len(), path.display());
    Ok(map)
}
