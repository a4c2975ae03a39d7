//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod fs;
pub mod uri;

pub use config::Config;
pub use diagnostic::Diagnostic;
pub use uri::UriRef;
