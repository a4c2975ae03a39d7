//! Location references: dot-segment normalization and relativization.
//!
//! Locations are [`Url`]s. A `Url` always carries a scheme; a location only
//! counts as an absolute base when it also has no fragment.

use std::fmt;

use url::{ParseError, Url};

use crate::mapping::errors::ArgumentError;

/// A location reference that may be relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriRef {
    Absolute(Url),
    Relative(String),
}

impl UriRef {
    /// Parse a reference, keeping it as text when it has no scheme.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        match Url::parse(text) {
            Ok(url) => Ok(UriRef::Absolute(url)),
            Err(ParseError::RelativeUrlWithoutBase) => Ok(UriRef::Relative(text.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Textual form with a `/` appended to the path if it lacks one.
    pub fn to_directory_string(&self) -> String {
        match self {
            UriRef::Absolute(url) if !url.path().ends_with('/') => {
                let mut url = url.clone();
                let path = format!("{}/", url.path());
                url.set_path(&path);
                url.to_string()
            }
            UriRef::Absolute(url) => url.to_string(),
            UriRef::Relative(text) => with_trailing_slash(text),
        }
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriRef::Absolute(url) => write!(f, "{}", url),
            UriRef::Relative(text) => write!(f, "{}", text),
        }
    }
}

impl From<Url> for UriRef {
    fn from(url: Url) -> Self {
        UriRef::Absolute(url)
    }
}

/// Whether `url` can serve as a base: it has a scheme and no fragment.
pub fn is_absolute(url: &Url) -> bool {
    url.fragment().is_none()
}

/// Split reference text into its path part and the `?query#fragment` tail.
///
/// The path part includes any scheme and authority prefix.
pub fn split_path(text: &str) -> (&str, &str) {
    let end = text.find(['?', '#']).unwrap_or(text.len());
    text.split_at(end)
}

/// Append `/` to the path part of reference text if it is missing.
pub fn with_trailing_slash(text: &str) -> String {
    let (path, tail) = split_path(text);
    if path.ends_with('/') {
        text.to_string()
    } else {
        format!("{}/{}", path, tail)
    }
}

/// Remove `.` and `..` segments from a path.
///
/// Rooted paths never climb above `/`; in unrooted paths, `..` segments
/// with nothing left to remove are dropped. A trailing `.` or `..` leaves
/// a directory-shaped result.
pub fn remove_dot_segments(path: &str) -> String {
    if !path.split('/').any(|s| s == "." || s == "..") {
        return path.to_string();
    }

    let rooted = path.starts_with('/');
    let floor = usize::from(rooted);
    let mut output: Vec<&str> = Vec::new();
    let mut directory = false;

    for segment in path.split('/') {
        match segment {
            "." => directory = true,
            ".." => {
                if output.len() > floor {
                    output.pop();
                }
                directory = true;
            }
            _ => {
                output.push(segment);
                directory = false;
            }
        }
    }

    if directory {
        output.push("");
    }
    output.join("/")
}

/// Return `location` with `.`/`..` segments removed from its path.
pub fn normalize_path(location: &Url) -> Url {
    let path = remove_dot_segments(location.path());
    if path == location.path() {
        return location.clone();
    }
    let mut normalized = location.clone();
    normalized.set_path(&path);
    normalized
}

fn same_authority(a: &Url, b: &Url) -> bool {
    a.username() == b.username()
        && a.password() == b.password()
        && a.host_str().map(str::to_ascii_lowercase) == b.host_str().map(str::to_ascii_lowercase)
        && a.port_or_known_default() == b.port_or_known_default()
}

/// Join remaining target segments into a descendant path.
fn descendant_path(segments: &[&str]) -> String {
    let path = segments.join("/");
    if path.is_empty() {
        return "./".to_string();
    }
    // A leading `name:` segment would read as a scheme, a leading empty
    // segment as a root
    match segments.first() {
        Some(first) if first.is_empty() || first.contains(':') => format!("./{}", path),
        _ => path,
    }
}

/// Express `location` relative to `base`, if a shorter form exists.
///
/// Query and fragment of `location` are dropped. The location comes back
/// as an absolute reference when the schemes or authorities differ, or
/// when the paths share no leading segment.
pub fn relativize(location: &Url, base: &Url) -> Result<UriRef, ArgumentError> {
    let mut location = location.clone();
    location.set_query(None);
    location.set_fragment(None);

    if !is_absolute(base) {
        return Err(ArgumentError::BaseNotAbsolute(base.to_string()));
    }

    if !location.scheme().eq_ignore_ascii_case(base.scheme()) {
        tracing::trace!("scheme differs from base: {}", location);
        return Ok(UriRef::Absolute(location));
    }
    if location.has_authority() != base.has_authority() {
        tracing::trace!("only one side has an authority: {}", location);
        return Ok(UriRef::Absolute(location));
    }
    if location.has_authority() && !same_authority(&location, base) {
        tracing::trace!("authority differs from base: {}", location);
        return Ok(UriRef::Absolute(location));
    }

    let base_path = remove_dot_segments(base.path());
    let target_path = remove_dot_segments(location.path());

    let mut base_segments: Vec<&str> = base_path.split('/').collect();
    base_segments.pop();
    let target: Vec<&str> = target_path.split('/').collect();

    let common = base_segments
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    if common == base_segments.len() {
        Ok(UriRef::Relative(descendant_path(&target[common..])))
    } else if common > 0 {
        let up = "../".repeat(base_segments.len() - common);
        Ok(UriRef::Relative(format!("{}{}", up, target[common..].join("/"))))
    } else {
        tracing::trace!("no common path prefix with base: {}", location);
        Ok(UriRef::Absolute(location))
    }
}

/// Relativize reference text against `base`.
///
/// Text without a scheme is already relative and comes back as is, minus
/// any query or fragment.
pub fn relativize_reference(reference: &str, base: &Url) -> Result<UriRef, ArgumentError> {
    match UriRef::parse(reference) {
        Ok(UriRef::Absolute(url)) => relativize(&url, base),
        Ok(UriRef::Relative(text)) => {
            if !is_absolute(base) {
                return Err(ArgumentError::BaseNotAbsolute(base.to_string()));
            }
            Ok(UriRef::Relative(split_path(&text).0.to_string()))
        }
        Err(e) => Err(ArgumentError::InvalidLocation(format!("{}: {}", reference, e))),
    }
}
