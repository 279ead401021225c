//! Reusable array fixtures.
//!
//! - [`canonical_scenario`]: fragments `[3, 2]` holding `10, 20, 30, 40`.
//! - [`sequential`]: every slot of the given layout filled with its index.

use fraglist_arena::FragmentedArray;

/// The canonical grow/append sequence: `grow(3)`, append `10, 20, 30`,
/// `grow(2)`, append `40`. Counts are `(4, 1)`.
pub fn canonical_scenario() -> FragmentedArray<i32> {
    let mut arr = FragmentedArray::new();
    arr.grow(3).expect("fixture grow");
    for v in [10, 20, 30] {
        arr.append(v).expect("fixture append");
    }
    arr.grow(2).expect("fixture grow");
    arr.append(40).expect("fixture append");
    arr
}

/// An array with one fragment per entry in `capacities`, completely full,
/// where the element at flat index `i` is `i`.
///
/// # Panics
///
/// Panics if any capacity is zero.
pub fn sequential(capacities: &[usize]) -> FragmentedArray<u64> {
    let mut arr = FragmentedArray::new();
    for &capacity in capacities {
        arr.grow(capacity).expect("fixture capacities must be positive");
    }
    let total = arr.capacity() as u64;
    arr.try_extend(0..total).expect("fixture fits its own capacity");
    arr
}
