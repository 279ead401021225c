//! Flat-index to (fragment, offset) resolution.
//!
//! Resolution is a prefix-sum walk over the fragment capacities in
//! allocation order. It is linear in the number of fragments, which is
//! small relative to element count: fragments record growth events, not
//! individual elements.

use fraglist_core::{FragmentId, Location};

/// Resolve a flat logical index against a list of fragment capacities.
///
/// Returns `None` if `index` is at or beyond the sum of all capacities.
/// An index exactly at a fragment boundary resolves to offset 0 of the
/// next fragment.
pub fn resolve(capacities: &[usize], index: usize) -> Option<Location> {
    let mut remaining = index;
    for (fragment, &capacity) in capacities.iter().enumerate() {
        if remaining < capacity {
            return Some(Location::new(FragmentId(fragment as u32), remaining));
        }
        remaining -= capacity;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_capacity_list_resolves_nothing() {
        assert_eq!(resolve(&[], 0), None);
    }

    #[test]
    fn index_inside_first_fragment() {
        assert_eq!(resolve(&[3, 2], 1), Some(Location::new(FragmentId(0), 1)));
    }

    #[test]
    fn boundary_index_routes_to_next_fragment() {
        assert_eq!(resolve(&[3, 2], 3), Some(Location::new(FragmentId(1), 0)));
        assert_eq!(resolve(&[3, 2], 2), Some(Location::new(FragmentId(0), 2)));
    }

    #[test]
    fn last_slot_resolves_and_past_end_does_not() {
        assert_eq!(resolve(&[3, 2], 4), Some(Location::new(FragmentId(1), 1)));
        assert_eq!(resolve(&[3, 2], 5), None);
    }

    #[test]
    fn single_slot_fragments() {
        let caps = [1, 1, 1, 1];
        for i in 0..4 {
            assert_eq!(resolve(&caps, i), Some(Location::new(FragmentId(i as u32), 0)));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resolved_offset_is_within_fragment(
                caps in proptest::collection::vec(1usize..16, 1..12),
                seed in 0usize..1000,
            ) {
                let total: usize = caps.iter().sum();
                let index = seed % total;
                let loc = resolve(&caps, index).unwrap();
                prop_assert!(loc.offset < caps[loc.fragment.index()]);
                let start: usize = caps[..loc.fragment.index()].iter().sum();
                prop_assert_eq!(start + loc.offset, index);
            }

            #[test]
            fn nothing_resolves_past_total(
                caps in proptest::collection::vec(1usize..16, 0..12),
                extra in 0usize..32,
            ) {
                let total: usize = caps.iter().sum();
                prop_assert_eq!(resolve(&caps, total + extra), None);
            }
        }
    }
}
