//! Fragmented-array error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during fragmented-array operations.
///
/// Every error is reported by the call that caused it. Failed calls
/// leave the array exactly as it was, except `try_extend`, which keeps
/// the values it appended before the array filled up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// `append` on a full array. Recoverable: `grow` and retry.
    CapacityExceeded {
        /// Total capacity of the array at the time of the call.
        capacity: usize,
    },
    /// Indexed access outside `[0, len)`.
    OutOfRange {
        /// The requested flat index.
        index: usize,
        /// Number of occupied elements at the time of the call.
        len: usize,
    },
    /// A caller-supplied argument was rejected (e.g. `grow(0)`).
    InvalidArgument {
        /// Why the argument was rejected.
        reason: &'static str,
    },
    /// `grow` would exceed the configured maximum number of fragments.
    FragmentLimit {
        /// The configured fragment limit.
        max_fragments: u32,
    },
    /// Total capacity would overflow `usize`, or one fragment would exceed
    /// `isize::MAX` bytes.
    CapacityOverflow,
    /// The allocator could not provide storage for a new fragment.
    AllocationFailed {
        /// Size of the requested fragment in bytes.
        bytes: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "array is full: all {capacity} slots occupied")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::FragmentLimit { max_fragments } => {
                write!(f, "fragment limit reached: at most {max_fragments} fragments")
            }
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::AllocationFailed { bytes } => {
                write!(f, "fragment allocation of {bytes} bytes failed")
            }
        }
    }
}

impl Error for ArrayError {}
