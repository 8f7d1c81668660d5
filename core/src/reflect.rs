//! Shape-driven access to mappable values.
//!
//! Schema types derive [`Facet`](facet::Facet). The engine never sees them
//! concretely: it reads through [`Peek`], writes through [`Poke`] and
//! answers static questions from each type's [`Shape`]. This module holds
//! the handful of shape rules the rest of the crate relies on:
//!
//! - a named struct is a node; every other shape is a leaf;
//! - `Option<T>` and smart pointers are looked through, and an absent
//!   optional struct is an absent node;
//! - writes go through `Option<T>` only, allocating a default `T` on demand;
//! - tag directives live in the `hueport` attribute namespace.

use facet::{
    Characteristic, Def, Field, HeapValue, Partial, Peek, PeekStruct, Poke, PokeOption,
    PokeStruct, ReflectErrorKind, Shape, StructKind, Type, UserType,
};

use crate::{FieldPath, MapError, Result};

/// Attribute namespace carrying tag directives,
/// as in `#[facet(hueport::canonical = "ansi_colors.red")]`.
pub const TAG_NAMESPACE: &str = "hueport";

/// Directive that keeps the mapper from assigning a field.
pub const READONLY: &str = "readonly";

/// Read view of a value's structure.
#[derive(Debug, Clone, Copy)]
pub enum Node<'mem, 'facet> {
    /// Terminal value.
    Leaf,
    /// Optional struct with nothing behind it.
    Absent,
    /// Struct that can be descended into.
    Struct(PeekStruct<'mem, 'facet>),
}

/// Write view of a value's structure.
#[derive(Debug)]
pub enum NodeMut<'mem, 'facet> {
    Leaf,
    Absent,
    Struct(PokeStruct<'mem, 'facet>),
}

/// Fields of a named struct shape. Wrappers are not looked through.
pub fn struct_fields(shape: &'static Shape) -> Option<&'static [Field]> {
    match shape.ty {
        Type::User(UserType::Struct(ty)) if ty.kind == StructKind::Struct => Some(ty.fields),
        _ => None,
    }
}

/// Peels `Option` and smart-pointer layers off a static shape.
///
/// Returns the innermost shape and whether an optional layer was crossed,
/// so `Option<Box<Inner>>` and `Inner` unwrap to the same shape.
pub fn unwrap_shape(shape: &'static Shape) -> (&'static Shape, bool) {
    let mut current = shape;
    let mut optional = false;
    loop {
        match current.def {
            Def::Option(def) => {
                optional = true;
                current = def.t();
            }
            Def::Pointer(def) => match def.pointee() {
                Some(pointee) => current = pointee,
                None => break,
            },
            _ => break,
        }
    }
    (current, optional)
}

/// Struct fields behind a field type, looking through wrappers.
pub fn fields_of(shape: &'static Shape) -> Option<&'static [Field]> {
    struct_fields(unwrap_shape(shape).0)
}

/// Looks up the `key` directive of a field.
///
/// Directives are namespaced attributes whose value is a string; a
/// flag-only directive such as `readonly` has no value and yields `None`.
pub fn tag(field: &'static Field, key: &str) -> Option<&'static str> {
    field
        .get_attr(Some(TAG_NAMESPACE), key)
        .and_then(|attr| attr.get_as::<&'static str>())
        .copied()
}

/// Fields marked `#[facet(hueport::readonly)]` are never assigned.
pub fn is_writable(field: &Field) -> bool {
    !field.has_attr(Some(TAG_NAMESPACE), READONLY)
}

/// Dereferences present optionals and smart pointers.
///
/// Returns `None` when an absent optional is crossed.
pub fn dereference<'mem, 'facet>(value: Peek<'mem, 'facet>) -> Option<Peek<'mem, 'facet>> {
    let mut current = value;
    loop {
        if let Ok(option) = current.into_option() {
            current = option.value()?;
        } else if let Ok(pointer) = current.into_pointer() {
            current = pointer.borrow_inner()?;
        } else {
            return Some(current);
        }
    }
}

/// Returns `false` for an absent optional.
pub fn is_present(value: Peek<'_, '_>) -> bool {
    dereference(value).is_some()
}

/// Structural read view; looks through present optionals and pointers.
pub fn node<'mem, 'facet>(value: Peek<'mem, 'facet>) -> Node<'mem, 'facet> {
    match dereference(value) {
        Some(inner) => match inner.into_struct() {
            Ok(node) if node.ty().kind == StructKind::Struct => Node::Struct(node),
            _ => Node::Leaf,
        },
        None if fields_of(value.shape()).is_some() => Node::Absent,
        None => Node::Leaf,
    }
}

/// Structural write view. Absent optionals are never allocated.
pub fn node_mut<'mem, 'facet>(value: Poke<'mem, 'facet>) -> NodeMut<'mem, 'facet> {
    open(value, false).unwrap_or(NodeMut::Leaf)
}

/// Structural write view that replaces an absent optional struct with its
/// default value before descending.
pub(crate) fn node_mut_allocating<'mem, 'facet>(
    value: Poke<'mem, 'facet>,
) -> Result<NodeMut<'mem, 'facet>> {
    open(value, true)
}

fn open<'mem, 'facet>(value: Poke<'mem, 'facet>, allocate: bool) -> Result<NodeMut<'mem, 'facet>> {
    if let Def::Option(def) = value.shape().def {
        let inner_is_struct = struct_fields(def.t()).is_some();
        let mut option = value.into_option().map_err(reflect_error)?;
        if option.is_none() && allocate && inner_is_struct {
            option
                .set_some_from_heap(default_value(def.t())?)
                .map_err(reflect_error)?;
        }
        return match option_value_mut(option) {
            Some(inner) => open(inner, allocate),
            None if inner_is_struct => Ok(NodeMut::Absent),
            None => Ok(NodeMut::Leaf),
        };
    }
    match value.into_struct() {
        Ok(node) if node.ty().kind == StructKind::Struct => Ok(NodeMut::Struct(node)),
        _ => Ok(NodeMut::Leaf),
    }
}

/// Overwrites `slot` with a copy of `payload`.
///
/// An optional slot takes `None` for an absent payload and `Some(copy)`
/// otherwise; a plain slot requires a present payload of its own shape.
pub fn assign<'facet>(
    slot: Poke<'_, 'facet>,
    payload: Option<Peek<'_, 'facet>>,
    path: &FieldPath,
) -> Result<()> {
    if let Def::Option(def) = slot.shape().def {
        let mut option = slot.into_option().map_err(reflect_error)?;
        return match payload {
            None => {
                option.set_none();
                Ok(())
            }
            Some(value) if value.shape() == def.t() => option
                .set_some_from_heap(clone_value(value)?)
                .map_err(reflect_error),
            Some(value) => Err(mismatch(path, def.t(), value.shape())),
        };
    }
    match payload {
        Some(value) => overwrite(slot, value, path),
        None => Err(MapError::TypeMismatch {
            path: path.clone(),
            expected: slot.shape().to_string(),
            found: "nothing".to_string(),
        }),
    }
}

fn overwrite<'facet>(mut slot: Poke<'_, 'facet>, value: Peek<'_, 'facet>, path: &FieldPath) -> Result<()> {
    let shape = slot.shape();
    if value.shape() != shape {
        return Err(mismatch(path, shape, value.shape()));
    }
    if !shape.is(Characteristic::Clone) {
        return Err(MapError::Reflect(format!("`{shape}` does not implement Clone")));
    }
    // SAFETY: `slot` and `value` both hold initialized values of `shape`, and
    // `shape` clones, so the slot is re-initialized right after the drop.
    unsafe {
        shape.call_drop_in_place(slot.data_mut());
        shape.call_clone_into(value.data(), slot.data_mut());
    }
    Ok(())
}

/// Copies `value` onto the heap through its shape's clone operation.
fn clone_value<'facet>(value: Peek<'_, 'facet>) -> Result<HeapValue<'facet, true>> {
    let shape = value.shape();
    let clone = move |target: facet::PtrUninit| {
        // SAFETY: `target` is fresh storage for `shape` and `value` holds an
        // initialized value of the same shape.
        unsafe { shape.call_clone_into(value.data(), target.assume_init()) }.ok_or(
            ReflectErrorKind::OperationFailed {
                shape,
                operation: "type does not implement Clone",
            },
        )
    };
    // SAFETY: the shape comes from a `Facet` implementation, and `clone`
    // initializes the frame fully whenever it returns `Ok`.
    let partial = unsafe { Partial::alloc_shape(shape) }.map_err(alloc_error)?;
    let partial = unsafe { partial.set_from_function(clone) }.map_err(reflect_error)?;
    partial.build().map_err(reflect_error)
}

/// Heap-allocated default value of `shape`.
fn default_value<'facet>(shape: &'static Shape) -> Result<HeapValue<'facet, true>> {
    // SAFETY: the shape comes from a `Facet` implementation.
    let partial = unsafe { Partial::alloc_shape(shape) }.map_err(alloc_error)?;
    partial
        .set_default()
        .and_then(|partial| partial.build())
        .map_err(reflect_error)
}

/// Mutable view of the value inside a present option, for the whole
/// lifetime of the option's borrow.
fn option_value_mut<'mem, 'facet>(option: PokeOption<'mem, 'facet>) -> Option<Poke<'mem, 'facet>> {
    let def = option.def();
    let mut value = option.into_inner();
    // SAFETY: `get_value` points into the option's own storage when it is
    // `Some`, so the same offset from the exclusive pointer stays inside the
    // borrow and addresses an initialized `def.t()`.
    unsafe {
        let inner = (def.vtable.get_value)(value.data());
        if inner.is_null() {
            return None;
        }
        let offset = inner.offset_from(value.data().as_byte_ptr()) as usize;
        Some(Poke::from_raw_parts(value.data_mut().field(offset), def.t()))
    }
}

/// Mutable view of one field, for the whole lifetime of the struct's borrow.
pub(crate) fn into_field<'mem, 'facet>(
    node: PokeStruct<'mem, 'facet>,
    field: &'static Field,
) -> Poke<'mem, 'facet> {
    let mut value = node.into_inner();
    // SAFETY: `field` belongs to this struct's shape, so its offset addresses
    // an initialized field of `field.shape()` inside the borrowed struct.
    unsafe { Poke::from_raw_parts(value.data_mut().field(field.offset), field.shape()) }
}

/// Shorter-lived copy of a mutable view.
pub(crate) fn reborrow<'a, 'facet>(value: &'a mut Poke<'_, 'facet>) -> Poke<'a, 'facet> {
    // SAFETY: the copy holds `value` exclusively for `'a`.
    unsafe { Poke::from_raw_parts(value.data_mut(), value.shape()) }
}

pub(crate) fn mismatch(path: &FieldPath, expected: &'static Shape, found: &'static Shape) -> MapError {
    MapError::TypeMismatch {
        path: path.clone(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

fn reflect_error(err: facet::ReflectError) -> MapError {
    MapError::Reflect(err.to_string())
}

fn alloc_error(err: facet::AllocError) -> MapError {
    MapError::Reflect(err.to_string())
}
