//! Mapping error types and diagnostics.

use std::io;

use miette::{Diagnostic as MietteDiagnostic, SourceSpan};
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// The mapping-file text violates the file grammar.
///
/// Carries the full source text and the byte offset of the offending
/// character so callers can point into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
#[error("{message} (at offset {offset})")]
#[diagnostic(code(packmap::mapping::format))]
pub struct FormatError {
    pub message: String,
    #[source_code]
    pub text: String,
    pub offset: usize,
    #[label("here")]
    span: SourceSpan,
}

impl FormatError {
    pub fn new(message: impl Into<String>, text: &str, offset: usize) -> Self {
        FormatError {
            message: message.into(),
            text: text.to_string(),
            offset,
            span: (offset, 0).into(),
        }
    }

    /// 1-based line and column of the offset.
    pub fn line_col(&self) -> (usize, usize) {
        let before = &self.text.as_bytes()[..self.offset.min(self.text.len())];
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n' || b == b'\r')
            .map_or(0, |i| i + 1);
        let line = before
            .iter()
            .enumerate()
            .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && before.get(i + 1) != Some(&b'\n')))
            .count()
            + 1;
        (line, self.offset - line_start + 1)
    }

    /// Convert to a user-friendly diagnostic with the offending line and a caret.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (line, column) = self.line_col();
        let offset = self.offset.min(self.text.len());
        let start = self.text[..offset]
            .rfind(['\n', '\r'])
            .map_or(0, |i| i + 1);
        let end = self.text[offset..]
            .find(['\n', '\r'])
            .map_or(self.text.len(), |i| offset + i);

        Diagnostic::error(self.message.clone())
            .with_context(format!("line {}, column {}", line, column))
            .with_context(self.text[start..end].to_string())
            .with_context(format!("{}^", " ".repeat(offset - start)))
            .with_suggestion("Entries have the form `name=location`, one per line")
    }
}

/// A caller-supplied value violates a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("package URI must not have a host part: `{0}`")]
    HasAuthority(String),

    #[error("package URI must not start with a '/': `{0}`")]
    RootRelative(String),

    #[error("unknown package name: `{0}`")]
    UnknownPackage(String),

    #[error("base location is not absolute: `{0}`")]
    BaseNotAbsolute(String),

    #[error("invalid location: {0}")]
    InvalidLocation(String),
}

/// Error while serializing a package map.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("package location must not be a package URI: `{location}` (for `{name}`)")]
    PackageLocation { name: String, location: String },

    #[error("failed to write package map")]
    Io(#[from] io::Error),
}
