//! File name normalization for stored uploads.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not an ASCII letter, digit or space.
static UNWANTED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 ]").expect("valid regex"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Splits a client-supplied file name into base name and extension.
///
/// Directory components (`/` or `\`) are dropped first. The extension is the
/// part after the last dot; a name without a dot has no extension.
///
/// ```ignore
/// assert_eq!(split_file_name("dir/photo.final.PNG"), ("photo.final", Some("PNG")));
/// assert_eq!(split_file_name("README"), ("README", None));
/// ```
pub fn split_file_name(name: &str) -> (&str, Option<&str>) {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    match base.rfind('.') {
        Some(dot) => (&base[..dot], Some(&base[dot + 1..])),
        None => (base, None),
    }
}

/// Strips unwanted characters and replaces whitespace runs with `-`.
pub fn sanitize_stem(stem: &str) -> String {
    let cleaned = UNWANTED_CHARS.replace_all(stem, "");
    WHITESPACE_RUNS.replace_all(&cleaned, "-").into_owned()
}

/// Builds the name an upload is stored under: `<stem>_<timestamp>.<ext>`.
///
/// The timestamp (unix seconds) keeps names from colliding across uploads of
/// the same file. The original extension is preserved verbatim.
pub fn stored_file_name(original: &str, timestamp: i64) -> String {
    let (stem, extension) = split_file_name(original);
    let stem = sanitize_stem(stem);

    match extension {
        Some(ext) if !ext.is_empty() => format!("{stem}_{timestamp}.{ext}"),
        _ => format!("{stem}_{timestamp}"),
    }
}
