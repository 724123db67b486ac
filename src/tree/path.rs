//! Materialized path handling.
//!
//! Canonical paths are rooted at `/root/` and always end in `/`. Client paths
//! are relative to the conceptual root unless they already start there.

use crate::types::{ROOT_NAME, ROOT_PATH};

/// Canonical path of the absolute root's children.
pub const ROOT_PREFIX: &str = "/root/";

/// Ensure a trailing `/`, leaving everything else as supplied.
pub fn with_trailing_slash(raw: &str) -> String {
    let mut path = raw.to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Normalize a client path into its canonical form.
///
/// `"/"`, `""` and `"/root"` all map to `"/root/"`; `"/A"` maps to `"/root/A/"`;
/// `"/root/A"` is already rooted and only gains the trailing slash.
/// Character content is not validated.
pub fn normalize(raw: &str) -> String {
    let path = with_trailing_slash(raw);
    if is_rooted(&path) {
        return path;
    }
    if path.starts_with('/') {
        format!("/{}{}", ROOT_NAME, path)
    } else {
        format!("/{}/{}", ROOT_NAME, path)
    }
}

/// True when `path` (with trailing slash) already sits under the root segment.
fn is_rooted(path: &str) -> bool {
    path.starts_with(ROOT_PREFIX)
}

/// True when a canonical path denotes the absolute root.
pub fn is_root(canonical: &str) -> bool {
    canonical == ROOT_PREFIX
}

/// Split a canonical path into the `(name, path)` identity of the record it
/// points at, i.e. the parent of anything stored under that path.
///
/// `"/root/A/"` yields `("A", "/root/")`, `"/root/"` yields `("root", "/")`.
/// `"/"` has no parent and yields `None`, as does any path whose last segment
/// is empty (`"/root/A//"`).
pub fn split_parent_of(path: &str) -> Option<(String, String)> {
    if path == ROOT_PATH {
        return None;
    }
    let trimmed = path.strip_suffix('/')?;
    let (rest, name) = trimmed.rsplit_once('/')?;
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), format!("{}/", rest)))
}

/// Prefix shared by the paths of every descendant of `(name, path)`.
pub fn child_prefix(name: &str, path: &str) -> String {
    format!("{}{}/", path, name)
}
