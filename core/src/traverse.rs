//! Depth-first pre-order walk over a schema value.
//!
//! The visitor sees every field once, with its accumulated path, its static
//! field description and its current value, and returns whether to descend
//! into the field's children. Leaves are never descended into, and neither
//! are absent optional nodes, though both are still visited.

use facet::{Field, Peek, PeekStruct, Poke, PokeStruct};
use tracing::trace;

use crate::FieldPath;
use crate::reflect::{self, Node, NodeMut};

/// Walks `root` read-only. A non-struct root yields zero visits.
pub fn traverse<'mem, 'facet, F>(root: Peek<'mem, 'facet>, mut visit: F)
where
    F: FnMut(&FieldPath, &'static Field, Peek<'mem, 'facet>) -> bool,
{
    if let Node::Struct(node) = reflect::node(root) {
        walk(node, None, &mut visit);
    }
}

fn walk<'mem, 'facet>(
    node: PeekStruct<'mem, 'facet>,
    prefix: Option<&FieldPath>,
    visit: &mut dyn FnMut(&FieldPath, &'static Field, Peek<'mem, 'facet>) -> bool,
) {
    let fields: &'static [Field] = node.ty().fields;
    for (index, field) in fields.iter().enumerate() {
        let Ok(value) = node.field(index) else {
            continue;
        };
        let path = child_path(prefix, field.name);
        if !visit(&path, field, value) {
            continue;
        }
        match reflect::node(value) {
            Node::Struct(child) => walk(child, Some(&path), visit),
            Node::Absent => trace!(path = %path, "absent node not descended"),
            Node::Leaf => {}
        }
    }
}

/// Walks `root` with write access to each visited field.
///
/// Absent optional nodes are visited but never allocated.
pub fn traverse_mut<'facet, F>(root: Poke<'_, 'facet>, mut visit: F)
where
    F: FnMut(&FieldPath, &'static Field, Poke<'_, 'facet>) -> bool,
{
    if let NodeMut::Struct(node) = reflect::node_mut(root) {
        walk_mut(node, None, &mut visit);
    }
}

fn walk_mut<'facet>(
    mut node: PokeStruct<'_, 'facet>,
    prefix: Option<&FieldPath>,
    visit: &mut dyn FnMut(&FieldPath, &'static Field, Poke<'_, 'facet>) -> bool,
) {
    let fields: &'static [Field] = node.ty().fields;
    for (index, field) in fields.iter().enumerate() {
        let path = child_path(prefix, field.name);
        let Ok(value) = node.field(index) else {
            continue;
        };
        if !visit(&path, field, value) {
            continue;
        }
        let Ok(value) = node.field(index) else {
            continue;
        };
        if let NodeMut::Struct(child) = reflect::node_mut(value) {
            walk_mut(child, Some(&path), visit);
        }
    }
}

pub(crate) fn child_path(prefix: Option<&FieldPath>, name: &str) -> FieldPath {
    match prefix {
        Some(parent) => parent.join(name),
        None => FieldPath::single(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet::Facet;

    #[derive(Debug, Clone, Default, PartialEq, Facet)]
    struct Inner {
        value: u32,
    }

    #[derive(Debug, Clone, Default, PartialEq, Facet)]
    struct Outer {
        name: String,
        inner: Inner,
        link: Option<Box<Inner>>,
    }

    fn visited(root: Peek<'_, '_>, recurse: bool) -> Vec<String> {
        let mut paths = Vec::new();
        traverse(root, |path, _, _| {
            paths.push(path.to_string());
            recurse
        });
        paths
    }

    #[test]
    fn test_pre_order_with_recursion() {
        let outer = Outer::default();
        assert_eq!(
            visited(Peek::new(&outer), true),
            vec!["name", "inner", "inner.value", "link"]
        );
    }

    #[test]
    fn test_stop_prevents_descent() {
        let outer = Outer::default();
        assert_eq!(visited(Peek::new(&outer), false), vec!["name", "inner", "link"]);
    }

    #[test]
    fn test_present_reference_is_dereferenced() {
        let outer = Outer {
            link: Some(Box::new(Inner { value: 7 })),
            ..Outer::default()
        };
        assert_eq!(
            visited(Peek::new(&outer), true),
            vec!["name", "inner", "inner.value", "link", "link.value"]
        );
    }

    #[test]
    fn test_leaf_root_is_a_no_op() {
        assert!(visited(Peek::new(&42u32), true).is_empty());
        let absent: Option<Box<Inner>> = None;
        assert!(visited(Peek::new(&absent), true).is_empty());
    }

    #[test]
    fn test_traverse_mut_does_not_allocate() {
        let mut outer = Outer::default();
        let mut count = 0;
        traverse_mut(Poke::new(&mut outer), |_, _, _| {
            count += 1;
            true
        });
        assert_eq!(count, 4);
        assert!(outer.link.is_none());
    }

    #[test]
    fn test_traverse_mut_can_write() {
        let mut outer = Outer::default();
        let five = 5u32;
        traverse_mut(Poke::new(&mut outer), |path, _, value| {
            if path.to_string() == "inner.value" {
                reflect::assign(value, Some(Peek::new(&five)), path).unwrap();
            }
            true
        });
        assert_eq!(outer.inner.value, 5);
    }
}
