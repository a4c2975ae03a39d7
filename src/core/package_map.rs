//! The package map - WHERE each package name points.
//!
//! A `PackageMap` is an insertion-ordered table from package name to the
//! directory-shaped location the package lives at. It is read-only once
//! built and can be shared freely between threads.

use std::fmt;

use url::Url;

use crate::mapping::errors::{ArgumentError, FormatError, WriteError};
use crate::mapping::{encode, parse, resolve, WriteOptions};

/// Ordered mapping from package name to package location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMap {
    entries: Vec<(String, Url)>,
}

impl PackageMap {
    /// Parse mapping-file text, resolving relative locations against `base`.
    pub fn parse(text: &str, base: &Url) -> Result<Self, FormatError> {
        parse::parse(text, base)
    }

    /// Build a map from already-validated entries.
    ///
    /// Names and locations are taken as given; nothing is checked here.
    /// [`PackageMap::write`] still re-checks every name before emitting it.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Url)>,
        S: Into<String>,
    {
        PackageMap {
            entries: entries
                .into_iter()
                .map(|(name, url)| (name.into(), url))
                .collect(),
        }
    }

    /// Get the location of a package.
    pub fn get(&self, name: &str) -> Option<&Url> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, url)| url)
    }

    /// Check whether a package name is mapped.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Url)> {
        self.entries.iter().map(|(name, url)| (name.as_str(), url))
    }

    /// Package names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a `package:` reference to a concrete location.
    ///
    /// References with any other scheme are returned unchanged.
    pub fn resolve(&self, reference: &Url) -> Result<Url, ArgumentError> {
        resolve::resolve(self, reference)
    }

    /// Write the map in mapping-file format to `sink`.
    pub fn write<W: std::io::Write>(
        &self,
        sink: &mut W,
        options: &WriteOptions<'_>,
    ) -> Result<(), WriteError> {
        encode::write(self, sink, options)
    }

    /// Render the map in mapping-file format with a generated header.
    pub fn to_text(&self) -> Result<String, WriteError> {
        encode::to_text(self)
    }

    pub(crate) fn push(&mut self, name: String, location: Url) {
        self.entries.push((name, location));
    }
}

impl fmt::Display for PackageMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, url) in self.iter() {
            writeln!(f, "{} -> {}", name, url)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PackageMap {
    type Item = (&'a str, &'a Url);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Url)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
