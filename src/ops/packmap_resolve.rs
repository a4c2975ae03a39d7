//! `packmap resolve` operation.

use anyhow::{Context, Result};
use url::Url;

use crate::core::PackageMap;

/// Resolve each reference through `map`.
///
/// References that are not `package:` URIs come back unchanged.
pub fn resolve_references<S: AsRef<str>>(
    map: &PackageMap,
    references: &[S],
) -> Result<Vec<Url>> {
    references
        .iter()
        .map(|reference| {
            let reference = reference.as_ref();
            let url = Url::parse(reference)
                .with_context(|| format!("invalid reference: {}", reference))?;
            map.resolve(&url)
                .with_context(|| format!("failed to resolve {}", reference))
        })
        .collect()
}
