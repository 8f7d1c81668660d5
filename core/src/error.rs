//! Error types for mapping operations.
//!
//! Only [`MapError::Structural`] aborts a mapping call. Every other variant
//! describes a per-field failure that the mapper routes to the caller's
//! unused-field callbacks instead of returning it.

use thiserror::Error;

use crate::FieldPath;

/// Errors raised while resolving, reconciling or assigning a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A mapping root is not a struct-shaped value.
    #[error("structural error: {0}")]
    Structural(String),

    /// A path segment names a missing field, or a non-terminal segment is a leaf.
    #[error("path not found: {0}")]
    PathNotFound(FieldPath),

    /// Read-mode resolution crossed an absent reference node.
    #[error("absent intermediate node on path: {0}")]
    AbsentIntermediate(FieldPath),

    /// Source value cannot be assigned to the destination field type.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: FieldPath,
        expected: String,
        found: String,
    },

    /// Resolved destination field is marked read-only.
    #[error("field is not writable: {0}")]
    NotWritable(FieldPath),

    /// A reflection operation (allocation, clone, option write) failed.
    #[error("reflection failed: {0}")]
    Reflect(String),
}

impl MapError {
    /// Returns `true` when the error aborts the whole mapping call.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Structural(_))
    }
}

/// Convenience alias for results with [`MapError`].
pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_structural_is_fatal() {
        let path = FieldPath::single("name");
        assert!(MapError::Structural("root is a leaf".into()).is_fatal());
        assert!(!MapError::PathNotFound(path.clone()).is_fatal());
        assert!(!MapError::AbsentIntermediate(path.clone()).is_fatal());
        assert!(!MapError::NotWritable(path).is_fatal());
        assert!(!MapError::Reflect("`Color` does not implement Clone".into()).is_fatal());
    }

    #[test]
    fn test_display_uses_dotted_path() {
        let err = MapError::PathNotFound(FieldPath::from_dotted("employee.full_name"));
        assert_eq!(err.to_string(), "path not found: employee.full_name");
    }
}
