//! Mapping-file encoding.
//!
//! Writes one `name=location` line per entry, preceded by a `#` comment
//! block. Writes go straight to the caller's sink; the sink is never
//! flushed or closed here.

use std::io::Write;

use chrono::{SecondsFormat, Utc};
use url::Url;

use crate::core::package_map::PackageMap;
use crate::core::package_name::check_identifier;
use crate::mapping::errors::{ArgumentError, WriteError};
use crate::mapping::resolve::is_package_uri;
use crate::util::uri::{is_absolute, relativize, UriRef};

/// Marker at the start of the generated header line.
pub const GENERATED_MARKER: &str = "generated by packmap on";

/// Options for [`write`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions<'a> {
    /// Emit locations relative to this base where possible.
    pub base: Option<&'a Url>,
    /// Comment block to emit instead of the generated header.
    pub comment: Option<&'a str>,
}

impl<'a> WriteOptions<'a> {
    pub fn with_base(mut self, base: &'a Url) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_comment(mut self, comment: &'a str) -> Self {
        self.comment = Some(comment);
        self
    }
}

fn write_comment<W: Write>(sink: &mut W, comment: Option<&str>) -> std::io::Result<()> {
    match comment {
        Some(comment) => {
            let comment = comment.strip_suffix('\n').unwrap_or(comment);
            for line in comment.split('\n') {
                writeln!(sink, "#{}", line)?;
            }
        }
        None => {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            writeln!(sink, "# {} {}", GENERATED_MARKER, now)?;
        }
    }
    Ok(())
}

/// Write `map` to `sink` in mapping-file format.
pub fn write<W: Write>(
    map: &PackageMap,
    sink: &mut W,
    options: &WriteOptions<'_>,
) -> Result<(), WriteError> {
    if let Some(base) = options.base {
        if !is_absolute(base) {
            return Err(ArgumentError::BaseNotAbsolute(base.to_string()).into());
        }
    }

    write_comment(sink, options.comment)?;

    for (name, location) in map.iter() {
        check_identifier(name, 0, name.len())?;
        if is_package_uri(location) {
            return Err(WriteError::PackageLocation {
                name: name.to_string(),
                location: location.to_string(),
            });
        }

        let value = match options.base {
            Some(base) => relativize(location, base)?,
            None => UriRef::Absolute(location.clone()),
        };

        writeln!(sink, "{}={}", name, value.to_directory_string())?;
    }

    Ok(())
}

/// Render `map` as mapping-file text with a generated header.
pub fn to_text(map: &PackageMap) -> Result<String, WriteError> {
    let mut buffer = Vec::new();
    write(map, &mut buffer, &WriteOptions::default())?;
    // Only UTF-8 is ever written
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
