//! Static checks over schema shapes.
//!
//! Run once when a schema is registered, before any instance is mapped:
//!
//! - [`check_acyclic`] rejects types that nest themselves, which would make
//!   write-mode allocation and traversal unbounded.
//! - [`validate_tags`] checks every tag directive against the counterpart type.

use facet::{Field, Shape};
use thiserror::Error;

use crate::reflect::{self, unwrap_shape};
use crate::traverse::child_path;
use crate::{FieldPath, resolve_type};

/// Schema validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A struct type contains itself, directly or through other types.
    #[error("schema type {ty} nests itself at {path}")]
    Cycle { ty: String, path: FieldPath },
    /// A tag directive contains an empty path segment.
    #[error("malformed tag on {field}: {tag:?}")]
    MalformedTag { field: FieldPath, tag: &'static str },
    /// A tag directive names a path missing from the counterpart type.
    #[error("tag on {field} names unknown path {tag} in {counterpart}")]
    UnknownTagPath {
        field: FieldPath,
        tag: &'static str,
        counterpart: String,
    },
    /// A tag directive names a field of a different inner type.
    #[error("tag on {field} maps {found} onto {tag} of type {expected}")]
    IncompatibleTag {
        field: FieldPath,
        tag: &'static str,
        expected: String,
        found: String,
    },
}

/// Rejects struct types that nest themselves.
///
/// Self-nesting fields must be declared with `#[facet(recursive_type)]`.
///
/// # Examples
///
/// ```
/// use facet::Facet;
/// use hueport_core::{check_acyclic, ValidationError};
///
/// #[derive(Debug, Clone, Default, Facet)]
/// pub struct Chain {
///     #[facet(recursive_type)]
///     pub next: Option<Box<Chain>>,
/// }
///
/// let err = check_acyclic(Chain::SHAPE).unwrap_err();
/// assert!(matches!(err, ValidationError::Cycle { .. }));
/// ```
pub fn check_acyclic(shape: &'static Shape) -> Result<(), ValidationError> {
    let root = unwrap_shape(shape).0;
    let mut stack = vec![root];
    visit_acyclic(root, None, &mut stack)
}

fn visit_acyclic(
    shape: &'static Shape,
    prefix: Option<&FieldPath>,
    stack: &mut Vec<&'static Shape>,
) -> Result<(), ValidationError> {
    let Some(fields) = reflect::struct_fields(shape) else {
        return Ok(());
    };
    for field in fields {
        let inner = unwrap_shape(field.shape()).0;
        if reflect::struct_fields(inner).is_none() {
            continue;
        }
        let path = child_path(prefix, field.name);
        if stack.contains(&inner) {
            return Err(ValidationError::Cycle {
                ty: inner.to_string(),
                path,
            });
        }
        stack.push(inner);
        visit_acyclic(inner, Some(&path), stack)?;
        stack.pop();
    }
    Ok(())
}

/// Checks every `tag_key` directive of `schema` against `counterpart`.
///
/// Untagged fields are not checked; identity mapping is allowed to miss.
/// Fields under a tagged field are skipped since the tagged field maps whole.
/// Call [`check_acyclic`] first; recursion into an already open type stops.
pub fn validate_tags(
    schema: &'static Shape,
    counterpart: &'static Shape,
    tag_key: &str,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let root = unwrap_shape(schema).0;
    let mut stack = vec![root];
    visit_tags(root, counterpart, tag_key, None, &mut stack, &mut errors);
    errors
}

fn visit_tags(
    shape: &'static Shape,
    counterpart: &'static Shape,
    tag_key: &str,
    prefix: Option<&FieldPath>,
    stack: &mut Vec<&'static Shape>,
    errors: &mut Vec<ValidationError>,
) {
    let Some(fields) = reflect::struct_fields(shape) else {
        return;
    };
    for field in fields {
        let path = child_path(prefix, field.name);
        let inner = unwrap_shape(field.shape()).0;
        match reflect::tag(field, tag_key).filter(|tag| !tag.is_empty()) {
            Some(tag) => {
                if let Some(err) = check_tag(&path, field, tag, counterpart) {
                    errors.push(err);
                }
            }
            None if reflect::struct_fields(inner).is_some() && !stack.contains(&inner) => {
                stack.push(inner);
                visit_tags(inner, counterpart, tag_key, Some(&path), stack, errors);
                stack.pop();
            }
            None => {}
        }
    }
}

fn check_tag(
    path: &FieldPath,
    field: &'static Field,
    tag: &'static str,
    counterpart: &'static Shape,
) -> Option<ValidationError> {
    let target = FieldPath::from_dotted(tag);
    if target.has_empty_segment() {
        return Some(ValidationError::MalformedTag {
            field: path.clone(),
            tag,
        });
    }
    let Ok(resolved) = resolve_type(counterpart, &target) else {
        return Some(ValidationError::UnknownTagPath {
            field: path.clone(),
            tag,
            counterpart: counterpart.to_string(),
        });
    };
    let expected = unwrap_shape(resolved.shape()).0;
    let found = unwrap_shape(field.shape()).0;
    if expected != found {
        return Some(ValidationError::IncompatibleTag {
            field: path.clone(),
            tag,
            expected: resolved.shape().to_string(),
            found: field.shape().to_string(),
        });
    }
    None
}
