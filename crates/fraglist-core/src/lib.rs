//! Core types for fraglist fragmented arrays.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: the numeric
//! [`Element`] trait and the strongly-typed [`FragmentId`] / [`Location`]
//! pair that a flat logical index resolves to.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod id;

pub use element::Element;
pub use id::{FragmentId, Location};
