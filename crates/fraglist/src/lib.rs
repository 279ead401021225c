//! fraglist: growable numeric arrays stored in independently allocated fragments.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fraglist sub-crates. For most users, adding `fraglist` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fraglist::prelude::*;
//!
//! let mut arr: FragmentedArray<i32> = FragmentedArray::new();
//! arr.grow(3)?;
//! arr.append(10)?;
//! arr.append(20)?;
//! arr.append(30)?;
//!
//! // Full: growing adds a fragment without touching the first one.
//! assert!(matches!(arr.append(40), Err(ArrayError::CapacityExceeded { .. })));
//! arr.grow(2)?;
//! arr.append(40)?;
//!
//! assert_eq!(arr.counts(), (4, 1));
//! assert_eq!(*arr.get(3)?, 40);
//! assert_eq!(arr.locate(3)?, Location::new(FragmentId(1), 0));
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `fraglist-arena` | `FragmentedArray`, fragments, config, errors, metrics |
//! | [`types`] | `fraglist-core` | `Element`, `FragmentId`, `Location` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Fragmented array storage (`fraglist-arena`).
///
/// Most users only need [`array::FragmentedArray`] and
/// [`array::ArrayError`], both also available in the [`prelude`].
pub use fraglist_arena as array;

/// Core element and location types (`fraglist-core`).
pub use fraglist_core as types;

/// Common imports for typical fraglist usage.
///
/// ```rust
/// use fraglist::prelude::*;
/// ```
pub mod prelude {
    pub use fraglist_arena::{ArrayConfig, ArrayError, ArrayMetrics, FragmentedArray};
    pub use fraglist_core::{Element, FragmentId, Location};
}
