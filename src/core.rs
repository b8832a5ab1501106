pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Separator between virtual path segments. Doubles as the root's own name,
/// which is never matched against user-supplied segments.
pub const SEPARATOR: char = '/';

/// Iterates the non-empty segments of a virtual path. Leading, trailing and
/// doubled separators contribute nothing.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Splits a path into an optional parent prefix and the final leaf name.
///
/// Trailing separators are ignored. An empty prefix counts as "no prefix";
/// this includes single-segment absolute paths like `/name`, whose target
/// parent is the caller's current directory.
pub(crate) fn split_leaf(path: &str) -> (Option<&str>, &str) {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rsplit_once(SEPARATOR) {
        Some(("", leaf)) => (None, leaf),
        Some((prefix, leaf)) => (Some(prefix), leaf),
        None => (None, trimmed),
    }
}
