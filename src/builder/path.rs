//! Image path normalization.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped inside a path segment.
///
/// Unreserved characters stay as they are, and so do the sub-delimiters
/// `$ & + : = @`. Everything else is escaped, including `/ ; , ?`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Normalize an image path for use as the trailing part of a URL.
///
/// Surrounding whitespace is trimmed and a single leading `/` is dropped.
/// Each `/`-separated segment is percent-encoded on its own, so encoded
/// bytes can never introduce a new path boundary. A trailing `/` survives
/// as an empty last segment.
pub fn sanitize_path(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }

    let path = path.strip_prefix('/').unwrap_or(path);

    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}
