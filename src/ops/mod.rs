//! High-level operations.
//!
//! This module contains the implementation of packmap commands.

pub mod load;
pub mod packmap_relativize;
pub mod packmap_resolve;
pub mod packmap_rewrite;

pub use load::load_package_map;
pub use packmap_relativize::relativize_location;
pub use packmap_resolve::resolve_references;
pub use packmap_rewrite::{rewrite, rewrite_package_map, RewriteOptions};
