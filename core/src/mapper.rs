//! Bidirectional structural mapping.
//!
//! Both entry points move values between two independently declared schemas
//! by following tag directives, and report every field that took no part in
//! the transfer.
//!
//! - [`map_into`] is driven by the source: each source field's directive names
//!   the destination path it is written to.
//! - [`map_from`] is driven by the destination: each destination field's
//!   directive names the source path it is read from.
//!
//! A field that maps is consumed whole and its children are not visited. A
//! field of the driving side that fails to resolve or type-check is reported
//! on the spot and then descended into, so its children may still map
//! individually. The other side is reported afterwards: fields that received
//! nothing and are not ancestors of a mapped path. Per-field failures never
//! abort a call.
//!
//! # Examples
//!
//! ```
//! use facet::{Facet, Peek, Poke};
//! use hueport_core::map_into;
//! use hueport_core as hueport;
//!
//! #[derive(Debug, Clone, Default, Facet)]
//! pub struct Badge {
//!     #[facet(hueport::canonical = "employee.full_name")]
//!     pub name: String,
//! }
//!
//! #[derive(Debug, Clone, Default, Facet)]
//! pub struct Employee {
//!     pub full_name: String,
//! }
//!
//! #[derive(Debug, Clone, Default, Facet)]
//! pub struct Directory {
//!     pub employee: Employee,
//! }
//!
//! let badge = Badge { name: "Alice".into() };
//! let mut directory = Directory::default();
//! let summary = map_into(
//!     Peek::new(&badge),
//!     Poke::new(&mut directory),
//!     |_, _| {},
//!     |_, _| {},
//!     "canonical",
//! )
//! .unwrap();
//!
//! assert_eq!(directory.employee.full_name, "Alice");
//! assert!(summary.unused_source.is_empty());
//! assert!(summary.unused_destination.is_empty());
//! ```

use facet::{Field, Peek, Poke, Shape};
use tracing::{debug, trace};

use crate::reflect::{self, Node, reborrow};
use crate::resolve::not_a_struct;
use crate::traverse::{traverse, traverse_mut};
use crate::{
    FieldPath, MapError, MappedPathSet, Result, counterpart_path, normalize, resolve_for_read,
    resolve_for_write, resolve_type,
};

/// Outcome of one mapping call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSummary {
    /// Destination paths written, sorted.
    pub written: Vec<FieldPath>,
    /// Source paths reported as unused, in traversal order.
    pub unused_source: Vec<FieldPath>,
    /// Destination paths reported as unused, in traversal order.
    pub unused_destination: Vec<FieldPath>,
}

/// Maps `source` into `destination`, driven by the source's tag directives.
///
/// Returns [`MapError::Structural`] when either root is not a struct.
pub fn map_into<'facet, S, D>(
    source: Peek<'_, 'facet>,
    mut destination: Poke<'_, 'facet>,
    mut on_unused_source: S,
    mut on_unused_destination: D,
    tag_key: &str,
) -> Result<MapSummary>
where
    S: FnMut(&FieldPath, Peek<'_, 'facet>),
    D: FnMut(&FieldPath, Peek<'_, 'facet>),
{
    ensure_struct(source)?;
    ensure_struct(destination.as_peek())?;

    let destination_shape = destination.shape();
    let mut written = MappedPathSet::new();
    let mut summary = MapSummary::default();

    traverse(source, |path, field, value| {
        let target = counterpart_path(path, field, tag_key);
        match write_field(reborrow(&mut destination), destination_shape, &target, value) {
            Ok(()) => {
                debug!(from = %path, to = %target, "mapped field");
                written.insert(target);
                false
            }
            Err(err) => {
                debug!(from = %path, to = %target, error = %err, "field not mapped");
                summary.unused_source.push(path.clone());
                on_unused_source(path, value);
                true
            }
        }
    });

    summary.written = written.written();
    report_unused(destination.as_peek(), &written, |path, value| {
        summary.unused_destination.push(path.clone());
        on_unused_destination(path, value);
    });
    Ok(summary)
}

/// Fills `destination` from `source`, driven by the destination's tag
/// directives.
///
/// Returns [`MapError::Structural`] when either root is not a struct.
pub fn map_from<'facet, S, D>(
    source: Peek<'_, 'facet>,
    destination: Poke<'_, 'facet>,
    mut on_unused_source: S,
    mut on_unused_destination: D,
    tag_key: &str,
) -> Result<MapSummary>
where
    S: FnMut(&FieldPath, Peek<'_, 'facet>),
    D: FnMut(&FieldPath, Peek<'_, 'facet>),
{
    ensure_struct(source)?;
    ensure_struct(destination.as_peek())?;

    let mut written = MappedPathSet::new();
    let mut read = MappedPathSet::new();
    let mut summary = MapSummary::default();

    traverse_mut(destination, |path, field, mut slot| {
        let origin = counterpart_path(path, field, tag_key);
        match read_field(source, &origin, field, reborrow(&mut slot), path) {
            Ok(()) => {
                debug!(from = %origin, to = %path, "mapped field");
                read.insert(origin);
                written.insert(path.clone());
                false
            }
            Err(err) => {
                debug!(from = %origin, to = %path, error = %err, "field not mapped");
                summary.unused_destination.push(path.clone());
                on_unused_destination(path, slot.as_peek());
                true
            }
        }
    });

    summary.written = written.written();
    report_unused(source, &read, |path, value| {
        summary.unused_source.push(path.clone());
        on_unused_source(path, value);
    });
    Ok(summary)
}

/// Type-checks against the static destination shape first, so intermediate
/// nodes are only allocated for a write that will succeed.
fn write_field<'facet>(
    destination: Poke<'_, 'facet>,
    destination_shape: &'static Shape,
    target: &FieldPath,
    value: Peek<'_, 'facet>,
) -> Result<()> {
    let field = resolve_type(destination_shape, target)?;
    if !reflect::is_writable(field) {
        return Err(MapError::NotWritable(target.clone()));
    }
    let payload = normalize(value, field.shape(), target)?;
    let slot = resolve_for_write(destination, target)?;
    reflect::assign(slot, payload, target)
}

fn read_field<'facet>(
    source: Peek<'_, 'facet>,
    origin: &FieldPath,
    field: &'static Field,
    slot: Poke<'_, 'facet>,
    path: &FieldPath,
) -> Result<()> {
    let value = resolve_for_read(source, origin)?;
    if !reflect::is_writable(field) {
        return Err(MapError::NotWritable(path.clone()));
    }
    let payload = normalize(value, slot.shape(), path)?;
    reflect::assign(slot, payload, path)
}

/// Reports every field of `root` that no mapped path touches.
///
/// Mapped fields stop the walk. Ancestors of mapped paths are walked
/// through without being reported. Everything else is reported and
/// descended into.
fn report_unused<'mem, 'facet, F>(root: Peek<'mem, 'facet>, mapped: &MappedPathSet, mut report: F)
where
    F: FnMut(&FieldPath, Peek<'mem, 'facet>),
{
    traverse(root, |path, _, value| {
        if mapped.is_written(path) {
            return false;
        }
        if mapped.is_ancestor(path) {
            return true;
        }
        trace!(path = %path, "unused field");
        report(path, value);
        true
    });
}

fn ensure_struct(root: Peek<'_, '_>) -> Result<()> {
    match reflect::node(root) {
        Node::Struct(_) => Ok(()),
        Node::Absent | Node::Leaf => Err(not_a_struct(root.shape())),
    }
}
