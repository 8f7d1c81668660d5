//! Counterpart path routing.

use facet::Field;

use crate::FieldPath;
use crate::reflect;

/// Returns the path a field maps to in the counterpart schema.
///
/// A non-empty directive under `tag_key` is read as a dotted path; otherwise
/// the field maps to the same path it occupies in its own schema.
pub fn counterpart_path(path: &FieldPath, field: &'static Field, tag_key: &str) -> FieldPath {
    match reflect::tag(field, tag_key) {
        Some(tag) if !tag.is_empty() => FieldPath::from_dotted(tag),
        _ => path.clone(),
    }
}
