//! packmap - resolve `package:` references through a package mapping file.
//!
//! This crate provides the library side of packmap: parsing mapping files,
//! resolving symbolic references, relativizing locations, and writing
//! mapping files back out.

pub mod core;
pub mod mapping;
pub mod ops;
pub mod util;

pub use crate::core::{package_map::PackageMap, package_name::is_valid_package_name};
pub use mapping::{ArgumentError, FormatError, WriteError, WriteOptions};
pub use util::uri::{normalize_path, relativize, UriRef};
