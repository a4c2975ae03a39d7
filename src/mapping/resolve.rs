//! `package:` reference resolution.

use url::Url;

use crate::core::package_map::PackageMap;
use crate::mapping::errors::ArgumentError;
use crate::util::uri::remove_dot_segments;

/// The scheme of symbolic package references.
pub const PACKAGE_SCHEME: &str = "package";

/// Whether `url` is a symbolic `package:` reference.
pub fn is_package_uri(url: &Url) -> bool {
    url.scheme().eq_ignore_ascii_case(PACKAGE_SCHEME)
}

/// Resolve a `package:` reference against `map`.
///
/// `package:name/rest` becomes `rest` resolved against the location of
/// `name`. Query and fragment of the reference are not carried over.
/// Any other reference is returned unchanged.
pub fn resolve(map: &PackageMap, reference: &Url) -> Result<Url, ArgumentError> {
    if !is_package_uri(reference) {
        return Ok(reference.clone());
    }
    if reference.has_authority() {
        return Err(ArgumentError::HasAuthority(reference.to_string()));
    }
    if reference.path().starts_with('/') {
        return Err(ArgumentError::RootRelative(reference.to_string()));
    }

    let path = remove_dot_segments(reference.path());
    let (name, rest) = path.split_once('/').unwrap_or((path.as_str(), ""));

    let location = map
        .get(name)
        .ok_or_else(|| ArgumentError::UnknownPackage(name.to_string()))?;

    // `rest` is path-only: a leading `name:` segment would read as a
    // scheme, and a leading empty segment as a root or authority
    let first = rest.split('/').next().unwrap_or_default();
    let rest = if rest.starts_with('/') || first.contains(':') {
        format!("./{}", rest)
    } else {
        rest.to_string()
    };

    let resolved = location
        .join(&rest)
        .map_err(|e| ArgumentError::InvalidLocation(format!("{}: {}", reference, e)))?;

    tracing::debug!("resolved {} -> {}", reference, resolved);
    Ok(resolved)
}
