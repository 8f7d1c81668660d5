//! Field paths and the per-call record of written destination paths.

use std::collections::HashSet;
use std::fmt;

/// Ordered sequence of field names addressing a location in a schema.
///
/// ```
/// use hueport_core::FieldPath;
///
/// let path = FieldPath::from_dotted("ansi_colors.red");
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.to_string(), "ansi_colors.red");
/// assert_eq!(path.parent(), Some(FieldPath::single("ansi_colors")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Single-segment path.
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Splits dotted text into segments. Empty segments are kept so that a
    /// malformed tag fails to resolve instead of silently collapsing.
    pub fn from_dotted(text: &str) -> Self {
        Self(text.split('.').map(str::to_string).collect())
    }

    /// Builds a path from segments, or `None` when there are none.
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        (!segments.is_empty()).then_some(Self(segments))
    }

    /// Child path one level deeper.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    /// Parent path, `None` for a single segment.
    pub fn parent(&self) -> Option<Self> {
        Self::from_segments(self.0[..self.0.len() - 1].iter().cloned())
    }

    /// Strict ancestor prefixes, shortest first.
    pub fn ancestors(&self) -> impl Iterator<Item = FieldPath> + '_ {
        (1..self.0.len()).map(|len| Self(self.0[..len].to_vec()))
    }

    /// Returns `true` when `self` is a strict prefix of `other`.
    pub fn is_ancestor_of(&self, other: &FieldPath) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a path has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when any segment is empty (e.g. `"a..b"`).
    pub fn has_empty_segment(&self) -> bool {
        self.0.iter().any(String::is_empty)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Write-once record of the paths written during one mapping call.
///
/// Inserting a path also records each of its ancestor prefixes, so callers
/// can tell a fully written field from one that only has written descendants.
#[derive(Debug, Default, Clone)]
pub struct MappedPathSet {
    written: HashSet<FieldPath>,
    ancestors: HashSet<FieldPath>,
}

impl MappedPathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `path` as written, together with all of its ancestors.
    pub fn insert(&mut self, path: FieldPath) {
        for ancestor in path.ancestors() {
            self.ancestors.insert(ancestor);
        }
        self.written.insert(path);
    }

    /// `path` itself was written.
    pub fn is_written(&self, path: &FieldPath) -> bool {
        self.written.contains(path)
    }

    /// Some strict descendant of `path` was written.
    pub fn is_ancestor(&self, path: &FieldPath) -> bool {
        self.ancestors.contains(path)
    }

    /// `path` was written or lies on the way to a written path.
    pub fn contains(&self, path: &FieldPath) -> bool {
        self.is_written(path) || self.is_ancestor(path)
    }

    /// A strict ancestor of `path` was written.
    pub fn covers(&self, path: &FieldPath) -> bool {
        path.ancestors().any(|ancestor| self.written.contains(&ancestor))
    }

    /// Number of written paths, ancestors excluded.
    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// Written paths in sorted order.
    pub fn written(&self) -> Vec<FieldPath> {
        let mut paths: Vec<_> = self.written.iter().cloned().collect();
        paths.sort();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dotted_keeps_empty_segments() {
        let path = FieldPath::from_dotted("a..b");
        assert_eq!(path.len(), 3);
        assert!(path.has_empty_segment());
        assert!(!FieldPath::from_dotted("a.b").has_empty_segment());
    }

    #[test]
    fn test_ancestors_shortest_first() {
        let path = FieldPath::from_dotted("a.b.c");
        let ancestors: Vec<String> = path.ancestors().map(|p| p.to_string()).collect();
        assert_eq!(ancestors, vec!["a", "a.b"]);
        assert!(FieldPath::single("a").ancestors().next().is_none());
    }

    #[test]
    fn test_is_ancestor_of_is_strict() {
        let parent = FieldPath::single("a");
        let child = FieldPath::from_dotted("a.b");
        assert!(parent.is_ancestor_of(&child));
        assert!(!child.is_ancestor_of(&parent));
        assert!(!parent.is_ancestor_of(&parent));
        assert!(!FieldPath::single("ab").is_ancestor_of(&FieldPath::from_dotted("a.b")));
    }

    #[test]
    fn test_mapped_set_records_ancestors() {
        let mut set = MappedPathSet::new();
        set.insert(FieldPath::from_dotted("special_colors.background"));

        assert!(set.is_written(&FieldPath::from_dotted("special_colors.background")));
        assert!(set.is_ancestor(&FieldPath::single("special_colors")));
        assert!(!set.is_written(&FieldPath::single("special_colors")));
        assert!(set.contains(&FieldPath::single("special_colors")));
        assert!(!set.contains(&FieldPath::from_dotted("special_colors.cursor")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_covers_descendants_of_written_paths() {
        let mut set = MappedPathSet::new();
        set.insert(FieldPath::single("employee"));
        assert!(set.covers(&FieldPath::from_dotted("employee.full_name")));
        assert!(!set.covers(&FieldPath::single("employee")));
    }
}
