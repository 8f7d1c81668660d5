//! Gap filling across groups of equivalent optional fields.
//!
//! A [`FallbackGroup`] lists optional fields of one schema that stand in for
//! each other. Filling takes the first present member in declaration order
//! and copies its value into every absent member. Present members are never
//! overwritten, even when they disagree with each other.

use tracing::debug;

/// Accessor for one optional field of a schema.
pub type Accessor<S, T> = fn(&mut S) -> &mut Option<T>;

/// Named, ordered group of mutually substitutable fields.
pub struct FallbackGroup<S: 'static, T: 'static> {
    pub name: &'static str,
    pub members: &'static [Accessor<S, T>],
}

impl<S: 'static, T: 'static> FallbackGroup<S, T> {
    pub const fn new(name: &'static str, members: &'static [Accessor<S, T>]) -> Self {
        Self { name, members }
    }
}

impl<S: 'static, T: 'static> Clone for FallbackGroup<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static, T: 'static> Copy for FallbackGroup<S, T> {}

/// Record of one group that filled at least one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFill {
    pub group: &'static str,
    pub filled: usize,
}

/// Fills the absent members of one group and returns how many were filled.
pub fn fill_group<S, T>(scheme: &mut S, group: &FallbackGroup<S, T>) -> usize
where
    S: 'static,
    T: Clone + 'static,
{
    let Some(value) = group
        .members
        .iter()
        .find_map(|member| member(scheme).clone())
    else {
        return 0;
    };

    let mut filled = 0;
    for member in group.members {
        let slot = member(scheme);
        if slot.is_none() {
            *slot = Some(value.clone());
            filled += 1;
        }
    }
    filled
}

/// Fills every group in order. Groups that filled nothing are left out of
/// the result.
pub fn fill_fallbacks<'a, S, T, I>(scheme: &mut S, groups: I) -> Vec<GroupFill>
where
    S: 'static,
    T: Clone + 'static,
    I: IntoIterator<Item = &'a FallbackGroup<S, T>>,
{
    let mut fills = Vec::new();
    for group in groups {
        let filled = fill_group(scheme, group);
        if filled > 0 {
            debug!(group = group.name, filled, "filled fallback group");
            fills.push(GroupFill {
                group: group.name,
                filled,
            });
        }
    }
    fills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Palette {
        x: Option<u32>,
        y: Option<u32>,
        z: Option<u32>,
    }

    fn x(p: &mut Palette) -> &mut Option<u32> {
        &mut p.x
    }
    fn y(p: &mut Palette) -> &mut Option<u32> {
        &mut p.y
    }
    fn z(p: &mut Palette) -> &mut Option<u32> {
        &mut p.z
    }

    static GROUPS: &[FallbackGroup<Palette, u32>] = &[FallbackGroup::new("xyz", &[x, y, z])];

    #[test]
    fn test_single_present_member_fills_all() {
        let mut palette = Palette {
            y: Some(5),
            ..Palette::default()
        };
        let fills = fill_fallbacks(&mut palette, GROUPS);
        assert_eq!(palette, Palette { x: Some(5), y: Some(5), z: Some(5) });
        assert_eq!(fills, vec![GroupFill { group: "xyz", filled: 2 }]);
    }

    #[test]
    fn test_first_present_wins_without_overwrite() {
        let mut palette = Palette {
            x: Some(1),
            y: None,
            z: Some(3),
        };
        fill_fallbacks(&mut palette, GROUPS);
        assert_eq!(palette, Palette { x: Some(1), y: Some(1), z: Some(3) });
    }

    #[test]
    fn test_empty_group_is_skipped() {
        let mut palette = Palette::default();
        assert!(fill_fallbacks(&mut palette, GROUPS).is_empty());
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let mut palette = Palette {
            z: Some(9),
            ..Palette::default()
        };
        fill_fallbacks(&mut palette, GROUPS);
        let after_first = palette.clone();
        assert!(fill_fallbacks(&mut palette, GROUPS).is_empty());
        assert_eq!(palette, after_first);
    }
}
