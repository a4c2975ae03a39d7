//! Core data structures for packmap.
//!
//! - Package names and their validation
//! - The package map itself

pub mod package_map;
pub mod package_name;

pub use package_map::PackageMap;
pub use package_name::{check_identifier, is_valid_identifier, is_valid_package_name};
