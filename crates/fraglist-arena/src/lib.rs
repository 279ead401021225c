//! Fragment-based growable numeric arrays.
//!
//! A [`FragmentedArray`] stores its elements across a sequence of
//! independently allocated, fixed-capacity [`Fragment`]s instead of one
//! contiguous buffer, so growing never copies elements already stored.
//!
//! # Architecture
//!
//! ```text
//! FragmentedArray<T> (owner)
//! ├── Vec<Fragment<T>>        (Box<[T]> per grow call, allocation order)
//! ├── SmallVec<[usize; 8]>    (fragment capacities, walked by locate)
//! ├── capacity / len          (sum of capacities / occupied count)
//! └── ArrayConfig             (auto-grow size, fragment limit)
//! ```
//!
//! # Operations
//!
//! - **grow:** append one fragment; O(1) in elements moved.
//! - **append:** write the next free slot, or fail with
//!   [`ArrayError::CapacityExceeded`].
//! - **get / get_mut:** resolve a flat index via [`locate::resolve`],
//!   O(fragments), or fail with [`ArrayError::OutOfRange`].
//! - **counts:** `(occupied, free)`.
//!
//! No `unsafe`: fragments are boxed slices, zero-filled at allocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod fragment;
pub mod iter;
pub mod locate;
pub mod metrics;

// Public re-exports for the primary API surface.
pub use array::FragmentedArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use fragment::Fragment;
pub use iter::{Iter, IterMut};
pub use metrics::ArrayMetrics;

/// Result alias for fragmented-array operations.
pub type Result<T> = std::result::Result<T, ArrayError>;
