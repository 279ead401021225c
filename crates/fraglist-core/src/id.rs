//! Strongly-typed fragment identifiers and resolved element locations.

use std::fmt;

/// Identifies a fragment within a fragmented array.
///
/// Fragments are numbered in allocation order: `FragmentId(n)` is the
/// n-th fragment appended by `grow`. Ids are never reused or reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId(pub u32);

impl FragmentId {
    /// Position of this fragment in the array's fragment list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FragmentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Physical position of an element: which fragment, and where inside it.
///
/// Produced by resolving a flat logical index against the array's
/// fragment capacities. `offset` is always strictly less than the
/// capacity of `fragment`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// The fragment holding the element.
    pub fragment: FragmentId,
    /// Offset of the element within that fragment.
    pub offset: usize,
}

impl Location {
    /// Create a location from a fragment id and an in-fragment offset.
    pub fn new(fragment: FragmentId, offset: usize) -> Self {
        Self { fragment, offset }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fragment {} offset {}", self.fragment, self.offset)
    }
}
