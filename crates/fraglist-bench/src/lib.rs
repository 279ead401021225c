//! Benchmark profiles and utilities for fraglist.
//!
//! Provides pre-built fragment layouts and access patterns:
//!
//! - [`reference_profile`]: 64 fragments of 1024 elements (64K slots)
//! - [`stress_profile`]: 1024 fragments of 1024 elements (~1M slots)
//! - [`uneven_layout`]: deterministic mixed fragment sizes via seed
//! - [`access_pattern`]: deterministic pseudo-random flat indices via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fraglist_arena::{ArrayError, FragmentedArray};

/// Fragment count of the reference profile.
pub const REFERENCE_FRAGMENTS: usize = 64;

/// Fragment count of the stress profile.
pub const STRESS_FRAGMENTS: usize = 1024;

/// Capacity of each fragment in the uniform profiles.
pub const FRAGMENT_CAPACITY: usize = 1024;

/// Build a full array of `fragments` uniform fragments, element `i` = `i`.
fn uniform_profile(fragments: usize) -> Result<FragmentedArray<f32>, ArrayError> {
    let mut arr = FragmentedArray::new();
    for _ in 0..fragments {
        arr.grow(FRAGMENT_CAPACITY)?;
    }
    let total = arr.capacity();
    arr.try_extend((0..total).map(|i| i as f32))?;
    Ok(arr)
}

/// Reference benchmark array: 64 x 1024 `f32`, completely full.
pub fn reference_profile() -> Result<FragmentedArray<f32>, ArrayError> {
    uniform_profile(REFERENCE_FRAGMENTS)
}

/// Stress benchmark array: 1024 x 1024 `f32`, completely full.
///
/// Index resolution is linear in fragment count, so this profile shows
/// the worst case of the prefix-sum walk.
pub fn stress_profile() -> Result<FragmentedArray<f32>, ArrayError> {
    uniform_profile(STRESS_FRAGMENTS)
}

/// Generate `count` deterministic fragment capacities in `1..=max`.
pub fn uneven_layout(count: usize, max: usize, seed: u64) -> Vec<usize> {
    let max = max.max(1) as u64;
    (0..count as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            ((h >> 33) % max + 1) as usize
        })
        .collect()
}

/// Generate `n` deterministic flat indices in `0..len`.
///
/// Returns an empty pattern if `len` is zero.
pub fn access_pattern(len: usize, n: usize, seed: u64) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % len as u64) as usize
        })
        .collect()
}
