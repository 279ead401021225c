//! Fixed-capacity storage blocks.
//!
//! A [`Fragment`] is one contiguous, zero-filled `Box<[T]>` allocated by a
//! single `grow` call. Fragments are never resized: growing the array
//! appends a new fragment and leaves every existing one where it is.

use fraglist_core::Element;

use crate::error::ArrayError;

/// A single fixed-capacity block of elements.
///
/// The fragment does not track which of its slots are occupied; that is
/// the owning array's job. Slots past the array's occupied count hold
/// either zero or a value left over from before a `clear()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment<T: Element> {
    /// Backing storage. Allocated to full capacity at creation.
    data: Box<[T]>,
}

impl<T: Element> Fragment<T> {
    /// Create a new zero-initialised fragment with the given capacity.
    ///
    /// # Errors
    ///
    /// - `CapacityOverflow` if `capacity` elements exceed `isize::MAX` bytes.
    /// - `AllocationFailed` if the allocator cannot provide the storage.
    pub fn try_new(capacity: usize) -> Result<Self, ArrayError> {
        let bytes = capacity
            .checked_mul(std::mem::size_of::<T>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(ArrayError::CapacityOverflow)?;

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailed { bytes })?;
        data.resize(capacity, T::ZERO);
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Total capacity in elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Get a shared slice at the given offset and length.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the fragment's capacity.
    pub fn slice(&self, offset: usize, len: usize) -> &[T] {
        &self.data[offset..offset + len]
    }

    /// The whole fragment, occupied or not.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The whole fragment, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fragment_is_zeroed() {
        let frag: Fragment<f32> = Fragment::try_new(16).unwrap();
        assert_eq!(frag.capacity(), 16);
        assert!(frag.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn slice_reads_written_data() {
        let mut frag: Fragment<i64> = Fragment::try_new(8).unwrap();
        frag.as_mut_slice()[2] = 7;
        frag.as_mut_slice()[4] = 9;
        assert_eq!(frag.slice(2, 3), &[7, 0, 9]);
    }

    #[test]
    fn clone_is_independent() {
        let mut a: Fragment<u8> = Fragment::try_new(4).unwrap();
        a.as_mut_slice()[0] = 1;
        let b = a.clone();
        a.as_mut_slice()[0] = 2;
        assert_eq!(b.as_slice()[0], 1);
    }

    #[test]
    fn memory_bytes_tracks_element_size() {
        assert_eq!(Fragment::<f64>::try_new(10).unwrap().memory_bytes(), 80);
        assert_eq!(Fragment::<u16>::try_new(10).unwrap().memory_bytes(), 20);
    }

    #[test]
    fn byte_size_overflow_returns_error_not_panic() {
        // usize::MAX / 4 elements of 8 bytes overflows usize.
        let result = Fragment::<u64>::try_new(usize::MAX / 4);
        assert_eq!(result, Err(ArrayError::CapacityOverflow));
    }

    #[test]
    fn byte_size_above_isize_max_is_overflow() {
        // Fits in usize bytes, but exceeds the isize::MAX allocation limit.
        let result = Fragment::<u16>::try_new(usize::MAX / 2);
        assert_eq!(result, Err(ArrayError::CapacityOverflow));
    }

    #[test]
    #[should_panic]
    fn slice_past_capacity_panics() {
        let frag: Fragment<i32> = Fragment::try_new(4).unwrap();
        let _ = frag.slice(2, 3);
    }
}
