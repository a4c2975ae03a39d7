//! The package mapping file.
//!
//! A mapping file is line oriented text: `name=location` entries, `#`
//! comment lines, and blank lines. This module parses it into a
//! [`PackageMap`](crate::core::PackageMap), resolves `package:` references
//! through a map, and writes a map back out.

pub mod encode;
pub mod errors;
pub mod parse;
pub mod resolve;

pub use encode::{to_text, write, WriteOptions, GENERATED_MARKER};
pub use errors::{ArgumentError, FormatError, WriteError};
pub use parse::parse;
pub use resolve::{is_package_uri, resolve, PACKAGE_SCHEME};
