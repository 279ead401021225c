//! Fragmented-array configuration parameters.

use crate::error::ArrayError;

/// Configuration for a [`FragmentedArray`](crate::FragmentedArray).
///
/// Controls the size of automatically grown fragments and the hard limit
/// on fragment count. Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Capacity of fragments allocated by auto-growing operations
    /// (`push`, `extend_from_slice`). Explicit `grow` calls ignore it.
    ///
    /// Default: 1024. Must be non-zero.
    pub fragment_capacity: usize,

    /// Maximum number of fragments the array may hold.
    ///
    /// Default: 65_535. Must be non-zero.
    pub max_fragments: u32,

    /// Number of fragment-list slots reserved up front.
    ///
    /// Only the bookkeeping list is pre-reserved; no element storage is
    /// allocated until the first `grow`. Default: 8.
    pub reserve_fragments: usize,
}

impl ArrayConfig {
    /// Default auto-grow fragment capacity, in elements.
    pub const DEFAULT_FRAGMENT_CAPACITY: usize = 1024;

    /// Default maximum fragment count.
    pub const DEFAULT_MAX_FRAGMENTS: u32 = u16::MAX as u32;

    /// Default number of pre-reserved fragment-list slots.
    pub const DEFAULT_RESERVE_FRAGMENTS: usize = 8;

    /// Create a config with the given auto-grow fragment capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(fragment_capacity: usize) -> Self {
        Self {
            fragment_capacity,
            max_fragments: Self::DEFAULT_MAX_FRAGMENTS,
            reserve_fragments: Self::DEFAULT_RESERVE_FRAGMENTS,
        }
    }

    /// Check that all parameters are usable.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.fragment_capacity == 0 {
            return Err(ArrayError::InvalidArgument {
                reason: "fragment_capacity must be positive",
            });
        }
        if self.max_fragments == 0 {
            return Err(ArrayError::InvalidArgument {
                reason: "max_fragments must be positive",
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FRAGMENT_CAPACITY)
    }
}
