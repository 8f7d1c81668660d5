//! Reconciles a source value with a destination field type.

use facet::{Peek, Shape};

use crate::reflect::{self, mismatch};
use crate::{FieldPath, MapError, Result};

/// Produces a payload assignable to a field of shape `target`.
///
/// The source is dereferenced. The payload fits when both sides wrap the
/// same inner shape, so a plain value can fill an optional slot and a
/// present optional can fill a plain slot. An absent source only fits an
/// optional target. Unrelated types never coerce, numeric widening included.
///
/// ```
/// use facet::{Facet, Peek, Poke};
/// use hueport_core::{FieldPath, normalize, reflect::assign};
///
/// let path = FieldPath::single("count");
/// let three = 3u32;
/// let payload = normalize(Peek::new(&three), <Option<u32>>::SHAPE, &path).unwrap();
/// let mut slot: Option<u32> = None;
/// assign(Poke::new(&mut slot), payload, &path).unwrap();
/// assert_eq!(slot, Some(3));
///
/// assert!(normalize(Peek::new(&three), u64::SHAPE, &path).is_err());
/// ```
pub fn normalize<'mem, 'facet>(
    source: Peek<'mem, 'facet>,
    target: &'static Shape,
    path: &FieldPath,
) -> Result<Option<Peek<'mem, 'facet>>> {
    let (found, _) = reflect::unwrap_shape(source.shape());
    let (expected, optional) = reflect::unwrap_shape(target);
    if found != expected {
        return Err(mismatch(path, target, source.shape()));
    }
    let payload = reflect::dereference(source);
    if payload.is_none() && !optional {
        return Err(MapError::TypeMismatch {
            path: path.clone(),
            expected: target.to_string(),
            found: "nothing".to_string(),
        });
    }
    Ok(payload)
}
