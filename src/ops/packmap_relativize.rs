//! `packmap relativize` operation.

use anyhow::Result;
use url::Url;

use crate::mapping::ArgumentError;
use crate::util::uri::{relativize_reference, UriRef};

/// Express `location` relative to `base`, both given as text.
pub fn relativize_location(location: &str, base: &str) -> Result<UriRef> {
    let base = Url::parse(base).map_err(|_| ArgumentError::BaseNotAbsolute(base.to_string()))?;
    Ok(relativize_reference(location, &base)?)
}
