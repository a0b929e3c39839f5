//! Relative selector paths
//!
//! Selectors are opaque protocol paths, not filesystem paths, so this
//! is pure string work on `/`-separated segments.

/// Selector suffixes that name a listing file rather than a directory;
/// their containing directory is the base for relative paths.
const LISTING_SUFFIXES: [&str; 2] = [".gph", ".gophermap"];

fn parent(selector: &str) -> &str {
    selector.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

/// Path of `target` relative to the directory listed by `base`.
///
/// Falls back to `target` unchanged when it does not extend the base at
/// a segment boundary (it cannot be made relative).
pub fn relative_path(base: &str, target: &str) -> String {
    let base = if LISTING_SUFFIXES.iter().any(|s| base.ends_with(s)) {
        parent(base)
    } else {
        base
    };

    match target.strip_prefix(base) {
        Some("") => ".".to_string(),
        Some(rest) if rest.starts_with('/') => rest[1..].to_string(),
        Some(rest) if base.ends_with('/') || base.is_empty() => rest.to_string(),
        _ => target.to_string(),
    }
}
