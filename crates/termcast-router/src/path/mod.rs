//! Request-path validation and normalization.
//!
//! All functions here are pure: same input, same output, no side effects.

use std::borrow::Cow;

/// Checks whether a path is already in canonical form.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`
/// - Must not end with `/` (except the root `/` itself)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use termcast_router::path::is_canonical_path;
///
/// assert!(is_canonical_path("/"));
/// assert!(is_canonical_path("/browse"));
/// assert!(is_canonical_path("/a/42/raw"));
///
/// assert!(!is_canonical_path(""));
/// assert!(!is_canonical_path("browse"));
/// assert!(!is_canonical_path("/browse/"));
/// assert!(!is_canonical_path("/browse//comedy"));
/// ```
pub fn is_canonical_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalizes a request path to canonical form.
///
/// Returns `Cow::Borrowed` when the input is already canonical, so the
/// common case costs no allocation. Trailing slashes, duplicate slashes,
/// and a missing leading slash are all repaired:
///
/// ```
/// use termcast_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/browse");
/// assert!(matches!(path, Cow::Borrowed("/browse")));
///
/// assert_eq!(normalize_path("/browse/"), "/browse");
/// assert_eq!(normalize_path("/a//42///raw"), "/a/42/raw");
/// assert_eq!(normalize_path("docs"), "/docs");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical_path(path) {
        return Cow::Borrowed(path);
    }

    let joined = path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", joined))
    }
}
