//! Package name validation.
//!
//! A package name is an identifier: ASCII letters, `_`, `$`, and ASCII
//! digits anywhere but the first position.

use crate::mapping::errors::FormatError;

/// Whether `byte` may appear in a package name at the given position.
fn is_identifier_byte(byte: u8, first: bool) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b'$' || (!first && byte.is_ascii_digit())
}

/// Position of the first byte in `text[start..end]` that breaks the
/// identifier rules, or `start` if the range is empty.
fn first_invalid(text: &str, start: usize, end: usize) -> Option<usize> {
    if start >= end {
        return Some(start);
    }
    text.as_bytes()[start..end]
        .iter()
        .enumerate()
        .find(|&(i, &b)| !is_identifier_byte(b, i == 0))
        .map(|(i, _)| start + i)
}

/// Check whether `text[start..end]` is a valid package name.
pub fn is_valid_identifier(text: &str, start: usize, end: usize) -> bool {
    first_invalid(text, start, end).is_none()
}

/// Check that `text[start..end]` is a valid package name.
///
/// Fails with a [`FormatError`] at the first offending byte, or at `start`
/// for an empty range.
pub fn check_identifier(text: &str, start: usize, end: usize) -> Result<(), FormatError> {
    match first_invalid(text, start, end) {
        None => Ok(()),
        Some(offset) => Err(FormatError::new("not a valid package name", text, offset)),
    }
}

/// Check whether a whole string is a valid package name.
pub fn is_valid_package_name(name: &str) -> bool {
    is_valid_identifier(name, 0, name.len())
}
