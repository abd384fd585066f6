// ABOUTME: Helpers for operation paths - parent computation, segments, validation.
// ABOUTME: Pure string functions with no dependency on the store.

use crate::error::OperationError;

/// The character separating hierarchy segments in an operation name.
pub const SEPARATOR: char = '/';

/// Returns the path with its final `/segment` removed.
///
/// For a depth-1 path such as `/Root` the result is the empty string,
/// meaning the operation is a root. The input must already be valid.
pub fn parent_path(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Iterate over the segments of a path, root first.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.strip_prefix(SEPARATOR)
        .unwrap_or(path)
        .split(SEPARATOR)
        .filter(|s| !s.is_empty())
}

/// Number of segments in a path. `/A` has depth 1.
pub fn depth(path: &str) -> usize {
    segments(path).count()
}

/// Returns true if `path` lies strictly beneath `ancestor`.
pub fn is_descendant(path: &str, ancestor: &str) -> bool {
    path.len() > ancestor.len()
        && path.starts_with(ancestor)
        && path[ancestor.len()..].starts_with(SEPARATOR)
}

/// Check that a path is well formed.
///
/// A valid path is non-empty, starts with the separator, has no trailing
/// separator and contains no empty segment.
pub fn validate(path: &str) -> Result<(), OperationError> {
    if path.is_empty() {
        return Err(OperationError::InvalidArgument(
            "operation name must have a value".into(),
        ));
    }
    let Some(rest) = path.strip_prefix(SEPARATOR) else {
        return Err(OperationError::InvalidArgument(format!(
            "operation names must start with '{SEPARATOR}': {path}"
        )));
    };
    if rest.split(SEPARATOR).any(str::is_empty) {
        return Err(OperationError::InvalidArgument(format!(
            "operation name has an empty segment: {path}"
        )));
    }
    Ok(())
}
