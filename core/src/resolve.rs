//! Path resolution against schema values and schema types.
//!
//! Read mode never allocates: crossing an absent node is reported as
//! [`MapError::AbsentIntermediate`]. Write mode allocates a default value
//! behind every absent optional node it crosses. Writes are not carried
//! through smart pointers, so a boxed intermediate is only reachable for
//! reading. [`resolve_type`] answers the same question against a static
//! shape, so callers can type-check a path before committing to any
//! allocation.

use facet::{Field, Peek, Poke, Shape};

use crate::reflect::{self, Node, NodeMut};
use crate::{FieldPath, MapError, Result};

/// Resolves `path` for reading.
pub fn resolve_for_read<'mem, 'facet>(
    root: Peek<'mem, 'facet>,
    path: &FieldPath,
) -> Result<Peek<'mem, 'facet>> {
    let Node::Struct(mut node) = reflect::node(root) else {
        return Err(not_a_struct(root.shape()));
    };
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(MapError::PathNotFound(path.clone()));
    };
    for segment in parents {
        let value = node
            .field_by_name(segment)
            .map_err(|_| MapError::PathNotFound(path.clone()))?;
        node = match reflect::node(value) {
            Node::Struct(child) => child,
            Node::Absent => return Err(MapError::AbsentIntermediate(path.clone())),
            Node::Leaf => return Err(MapError::PathNotFound(path.clone())),
        };
    }
    node.field_by_name(last)
        .map_err(|_| MapError::PathNotFound(path.clone()))
}

/// Resolves `path` for writing, allocating absent intermediate nodes.
///
/// Fails with [`MapError::NotWritable`] when the terminal field is read-only.
pub fn resolve_for_write<'mem, 'facet>(
    root: Poke<'mem, 'facet>,
    path: &FieldPath,
) -> Result<Poke<'mem, 'facet>> {
    let root_shape = root.shape();
    let NodeMut::Struct(mut node) = reflect::node_mut(root) else {
        return Err(not_a_struct(root_shape));
    };
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(MapError::PathNotFound(path.clone()));
    };
    for segment in parents {
        let field = find(node.ty().fields, segment)
            .ok_or_else(|| MapError::PathNotFound(path.clone()))?;
        node = match reflect::node_mut_allocating(reflect::into_field(node, field))? {
            NodeMut::Struct(child) => child,
            NodeMut::Absent | NodeMut::Leaf => {
                return Err(MapError::PathNotFound(path.clone()));
            }
        };
    }
    let field = find(node.ty().fields, last).ok_or_else(|| MapError::PathNotFound(path.clone()))?;
    if !reflect::is_writable(field) {
        return Err(MapError::NotWritable(path.clone()));
    }
    Ok(reflect::into_field(node, field))
}

/// Resolves `path` against a static shape and returns the terminal field.
///
/// Optional and boxed intermediate nodes are looked through.
pub fn resolve_type(root: &'static Shape, path: &FieldPath) -> Result<&'static Field> {
    let mut fields = reflect::fields_of(root).ok_or_else(|| not_a_struct(root))?;
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(MapError::PathNotFound(path.clone()));
    };
    for segment in parents {
        fields = find(fields, segment)
            .and_then(|field| reflect::fields_of(field.shape()))
            .ok_or_else(|| MapError::PathNotFound(path.clone()))?;
    }
    find(fields, last).ok_or_else(|| MapError::PathNotFound(path.clone()))
}

fn find(fields: &'static [Field], name: &str) -> Option<&'static Field> {
    fields.iter().find(|field| field.name == name)
}

pub(crate) fn not_a_struct(shape: &'static Shape) -> MapError {
    MapError::Structural(format!("`{shape}` is not a struct"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet::Facet;

    #[derive(Debug, Clone, Default, PartialEq, Facet)]
    struct Leafy {
        level: i32,
        label: Option<String>,
    }

    #[derive(Debug, Clone, Default, PartialEq, Facet)]
    struct Tree {
        left: Option<Leafy>,
        right: Leafy,
        boxed: Option<Box<Leafy>>,
        count: u8,
    }

    #[test]
    fn test_read_through_value_node() {
        let tree = Tree {
            right: Leafy {
                level: 3,
                ..Leafy::default()
            },
            ..Tree::default()
        };
        let value = resolve_for_read(Peek::new(&tree), &FieldPath::from_dotted("right.level")).unwrap();
        assert_eq!(value.get::<i32>().unwrap(), &3);
    }

    #[test]
    fn test_read_through_present_box() {
        let tree = Tree {
            boxed: Some(Box::new(Leafy {
                level: 8,
                ..Leafy::default()
            })),
            ..Tree::default()
        };
        let value = resolve_for_read(Peek::new(&tree), &FieldPath::from_dotted("boxed.level")).unwrap();
        assert_eq!(value.get::<i32>().unwrap(), &8);
    }

    #[test]
    fn test_read_absent_intermediate_does_not_allocate() {
        let tree = Tree::default();
        let err = resolve_for_read(Peek::new(&tree), &FieldPath::from_dotted("left.level")).unwrap_err();
        assert!(matches!(err, MapError::AbsentIntermediate(_)));
        assert!(tree.left.is_none());
    }

    #[test]
    fn test_read_unknown_and_leaf_segments() {
        let tree = Tree::default();
        let missing = resolve_for_read(Peek::new(&tree), &FieldPath::from_dotted("right.depth"));
        assert!(matches!(missing, Err(MapError::PathNotFound(_))));
        let through_leaf = resolve_for_read(Peek::new(&tree), &FieldPath::from_dotted("count.bits"));
        assert!(matches!(through_leaf, Err(MapError::PathNotFound(_))));
    }

    #[test]
    fn test_write_allocates_absent_intermediate() {
        let mut tree = Tree::default();
        let nine = 9i32;
        let path = FieldPath::from_dotted("left.level");
        let slot = resolve_for_write(Poke::new(&mut tree), &path).unwrap();
        reflect::assign(slot, Some(Peek::new(&nine)), &path).unwrap();
        assert_eq!(tree.left.map(|leafy| leafy.level), Some(9));
    }

    #[test]
    fn test_write_does_not_pass_through_box() {
        let mut tree = Tree::default();
        let err = resolve_for_write(Poke::new(&mut tree), &FieldPath::from_dotted("boxed.level"))
            .unwrap_err();
        assert!(matches!(err, MapError::PathNotFound(_)));
        assert!(tree.boxed.is_none());
    }

    #[test]
    fn test_non_struct_root_is_structural() {
        let mut leaf = 5u8;
        let err = resolve_for_write(Poke::new(&mut leaf), &FieldPath::single("x")).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "structural error: `u8` is not a struct");
        assert!(resolve_for_read(Peek::new(&leaf), &FieldPath::single("x")).unwrap_err().is_fatal());
    }

    #[test]
    fn test_resolve_type_looks_through_references() {
        let field = resolve_type(Tree::SHAPE, &FieldPath::from_dotted("boxed.label")).unwrap();
        assert_eq!(field.name, "label");
        assert!(reflect::unwrap_shape(field.shape()).1);
        assert!(resolve_type(Tree::SHAPE, &FieldPath::from_dotted("boxed.nope")).is_err());
    }
}
