//! Mapping-file parsing.
//!
//! A single pass over the raw bytes of the input. Only four bytes are
//! significant: `=`, CR, LF and `#`. Everything else is either part of a
//! package name or part of a location.

use url::Url;

use crate::core::package_map::PackageMap;
use crate::core::package_name::check_identifier;
use crate::mapping::errors::FormatError;
use crate::util::uri::with_trailing_slash;

const EQUALS: u8 = b'=';
const CR: u8 = b'\r';
const LF: u8 = b'\n';
const HASH: u8 = b'#';

/// Parse mapping-file text into a [`PackageMap`].
///
/// Relative locations are resolved against `base`. Parsing stops at the
/// first malformed line; no partial map is returned.
pub fn parse(text: &str, base: &Url) -> Result<PackageMap, FormatError> {
    let bytes = text.as_bytes();
    let mut map = PackageMap::default();
    let mut index = 0;

    while index < bytes.len() {
        let line_start = index;
        let first = bytes[index];
        index += 1;

        if first == CR || first == LF {
            continue;
        }
        if first == EQUALS {
            return Err(FormatError::new("missing package name", text, line_start));
        }

        let is_comment = first == HASH;
        let mut separator = None;
        while index < bytes.len() {
            match bytes[index] {
                CR | LF => break,
                EQUALS if separator.is_none() && !is_comment => separator = Some(index),
                _ => {}
            }
            index += 1;
        }
        let end = index;

        if is_comment {
            continue;
        }
        let Some(separator) = separator else {
            return Err(FormatError::new("no '=' on line", text, line_start));
        };

        check_identifier(text, line_start, separator)?;
        let name = &text[line_start..separator];

        let value_start = separator + 1;
        let value = with_trailing_slash(&text[value_start..end]);
        let location = base.join(&value).map_err(|e| {
            FormatError::new(
                format!("invalid package location: {}", e),
                text,
                value_start,
            )
        })?;

        if map.contains(name) {
            return Err(FormatError::new(
                "same package name occurred twice",
                text,
                line_start,
            ));
        }

        tracing::debug!("package `{}` -> {}", name, location);
        map.push(name.to_string(), location);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("file:///work/app/").unwrap()
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_parse_entries_in_order() {
        let map = parse("b=http://x/b/\na=http://x/a/\n", &base()).unwrap();
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(map.get("a"), Some(&url("http://x/a/")));
    }

    #[test]
    fn test_parse_appends_separator() {
        let map = parse("foo=http://x/foo\n", &base()).unwrap();
        assert_eq!(map.get("foo"), Some(&url("http://x/foo/")));
    }

    #[test]
    fn test_parse_resolves_relative_against_base() {
        let map = parse("foo=../pkgs/foo/lib\nbar=lib\n", &base()).unwrap();
        assert_eq!(map.get("foo"), Some(&url("file:///work/pkgs/foo/lib/")));
        assert_eq!(map.get("bar"), Some(&url("file:///work/app/lib/")));
    }

    #[test]
    fn test_parse_empty_value_is_base_root() {
        let map = parse("foo=\n", &base()).unwrap();
        assert_eq!(map.get("foo"), Some(&url("file:///")));
    }

    #[test]
    fn test_parse_separator_before_query() {
        let map = parse("foo=http://x/foo?v=1", &base()).unwrap();
        assert_eq!(map.get("foo"), Some(&url("http://x/foo/?v=1")));
    }

    #[test]
    fn test_parse_later_equals_belong_to_value() {
        let map = parse("foo=http://x/a=b\n", &base()).unwrap();
        assert_eq!(map.get("foo"), Some(&url("http://x/a=b/")));
    }

    #[test]
    fn test_parse_line_endings() {
        let map = parse("a=http://x/a/\r\nb=http://x/b/\rc=http://x/c/", &base()).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("c"), Some(&url("http://x/c/")));
    }

    #[test]
    fn test_parse_blank_lines() {
        let map = parse("\n\r\n\na=http://x/\n\n", &base()).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("", &base()).unwrap().is_empty());
    }

    #[test]
    fn test_comment_lines_are_ignored() {
        let map = parse("#a=b\nc=http://z/\n", &base()).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("c"), Some(&url("http://z/")));
    }

    #[test]
    fn test_comment_without_terminator() {
        let map = parse("c=http://z/\n# trailing", &base()).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_missing_package_name() {
        let err = parse("a=http://x/\n=http://y/\n", &base()).unwrap_err();
        assert_eq!(err.message, "missing package name");
        assert_eq!(err.offset, 12);
    }

    #[test]
    fn test_no_equals_on_line() {
        let err = parse("a=http://x/\nfoo\nb=http://y/", &base()).unwrap_err();
        assert_eq!(err.message, "no '=' on line");
        assert_eq!(err.offset, 12);
    }

    #[test]
    fn test_duplicate_name() {
        let err = parse("a=http://x/\na=http://y/\n", &base()).unwrap_err();
        assert_eq!(err.message, "same package name occurred twice");
        assert_eq!(err.offset, 12);
    }

    #[test]
    fn test_digit_first_name_rejected() {
        let err = parse("1x=http://a/", &base()).unwrap_err();
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_underscore_and_dollar_names() {
        assert!(parse("_x=http://a/", &base()).is_ok());
        assert!(parse("$x=http://a/", &base()).is_ok());
    }

    #[test]
    fn test_invalid_name_character_offset() {
        let err = parse("ok=http://a/\nfoo-bar=http://b/\n", &base()).unwrap_err();
        assert_eq!(err.offset, 16);
        assert_eq!(err.text, "ok=http://a/\nfoo-bar=http://b/\n");
    }

    #[test]
    fn test_invalid_location() {
        let opaque = url("foo:bar");
        let err = parse("a=lib", &opaque).unwrap_err();
        assert!(err.message.starts_with("invalid package location"));
        assert_eq!(err.offset, 2);
    }
}
