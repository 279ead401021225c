//! The fragmented array: a growable numeric array built from fixed blocks.
//!
//! A [`FragmentedArray`] owns an ordered list of [`Fragment`]s. Growing the
//! array appends a new fragment; existing elements are never moved or
//! copied. Elements are appended one at a time into the first free logical
//! slot, and flat indices are resolved to a (fragment, offset) pair by a
//! prefix-sum walk over the fragment capacities.

use std::fmt;
use std::ops::{Index, IndexMut};

use fraglist_core::{Element, FragmentId, Location};
use smallvec::SmallVec;

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::fragment::Fragment;
use crate::iter::{Iter, IterMut};
use crate::locate;
use crate::metrics::ArrayMetrics;

/// A growable numeric array stored across independently allocated fragments.
///
/// Invariants, upheld by every operation:
/// - `len <= capacity`
/// - `capacity == sum of fragment capacities`
/// - fragments are only ever appended, never reordered, split or dropped
///   (other than by `take` or dropping the whole array)
///
/// `Clone` is a deep copy: the clone gets freshly allocated fragments with
/// the same capacities and values.
#[derive(Clone)]
pub struct FragmentedArray<T: Element> {
    /// Fragments in allocation order (= logical element order).
    fragments: Vec<Fragment<T>>,
    /// Per-fragment capacities, parallel to `fragments`. Kept separately so
    /// index resolution walks a dense `usize` list.
    capacities: SmallVec<[usize; 8]>,
    /// Sum of `capacities`.
    capacity: usize,
    /// Number of occupied elements.
    len: usize,
    config: ArrayConfig,
}

impl<T: Element> FragmentedArray<T> {
    /// Create an empty array (no fragments, zero capacity) with the
    /// default configuration.
    pub fn new() -> Self {
        Self::empty(ArrayConfig::default())
    }

    /// Create an empty array with the given configuration.
    ///
    /// Returns `ArrayError::InvalidArgument` if the config fails validation.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: ArrayConfig) -> Self {
        Self {
            fragments: Vec::with_capacity(config.reserve_fragments),
            capacities: SmallVec::new(),
            capacity: 0,
            len: 0,
            config,
        }
    }

    /// Allocate one new fragment of `capacity` elements.
    ///
    /// Existing fragments are untouched: the cost is one allocation plus
    /// bookkeeping, independent of how many elements are stored. On error
    /// the array is left unchanged.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `capacity` is zero.
    /// - `FragmentLimit` if the array already holds `max_fragments` fragments.
    /// - `CapacityOverflow` if the total capacity would overflow `usize`,
    ///   or the fragment would exceed `isize::MAX` bytes.
    /// - `AllocationFailed` if the allocator cannot provide the fragment.
    pub fn grow(&mut self, capacity: usize) -> Result<(), ArrayError> {
        if capacity == 0 {
            return Err(ArrayError::InvalidArgument {
                reason: "fragment capacity must be positive",
            });
        }
        if self.fragments.len() >= self.config.max_fragments as usize {
            return Err(ArrayError::FragmentLimit {
                max_fragments: self.config.max_fragments,
            });
        }
        let total = self
            .capacity
            .checked_add(capacity)
            .ok_or(ArrayError::CapacityOverflow)?;
        let fragment = Fragment::try_new(capacity)?;

        self.fragments.push(fragment);
        self.capacities.push(capacity);
        self.capacity = total;
        Ok(())
    }

    /// Store `value` in the first free slot.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if every slot is occupied; `grow` and retry.
    pub fn append(&mut self, value: T) -> Result<(), ArrayError> {
        self.append_located(value).map(|_| ())
    }

    /// Store `value` in the first free slot, growing by
    /// `config.fragment_capacity` first if the array is full.
    ///
    /// Returns where the value was stored.
    pub fn push(&mut self, value: T) -> Result<Location, ArrayError> {
        if self.is_full() {
            self.grow(self.config.fragment_capacity)?;
        }
        self.append_located(value)
    }

    /// Append every value in `values`, growing at most once.
    ///
    /// If the free slots do not cover `values`, a single fragment of
    /// `max(config.fragment_capacity, shortfall)` is allocated first, so
    /// the whole batch fits. If that growth fails nothing is appended.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), ArrayError> {
        let shortfall = values.len().saturating_sub(self.free());
        if shortfall > 0 {
            self.grow(shortfall.max(self.config.fragment_capacity))?;
        }
        for &value in values {
            self.append_located(value)?;
        }
        Ok(())
    }

    /// Append values from `iter` without growing.
    ///
    /// Returns the number of values appended. If the array fills up while
    /// values remain, returns `CapacityExceeded`; the values appended before
    /// that point stay in the array.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<usize, ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut written = 0;
        for value in iter {
            self.append_located(value)?;
            written += 1;
        }
        Ok(written)
    }

    fn append_located(&mut self, value: T) -> Result<Location, ArrayError> {
        let full = ArrayError::CapacityExceeded {
            capacity: self.capacity,
        };
        if self.len == self.capacity {
            return Err(full);
        }
        let loc = locate::resolve(&self.capacities, self.len).ok_or(full)?;
        self.fragments[loc.fragment.index()].as_mut_slice()[loc.offset] = value;
        self.len += 1;
        Ok(loc)
    }

    /// Resolve an occupied flat index to its (fragment, offset) location.
    ///
    /// # Errors
    ///
    /// `OutOfRange` unless `index < len`.
    pub fn locate(&self, index: usize) -> Result<Location, ArrayError> {
        let out_of_range = ArrayError::OutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        locate::resolve(&self.capacities, index).ok_or(out_of_range)
    }

    /// Shared reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let loc = self.locate(index)?;
        Ok(&self.fragments[loc.fragment.index()].as_slice()[loc.offset])
    }

    /// Mutable reference to the element at `index`. Writes through the
    /// reference replace the stored value.
    ///
    /// # Errors
    ///
    /// `OutOfRange` unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let loc = self.locate(index)?;
        Ok(&mut self.fragments[loc.fragment.index()].as_mut_slice()[loc.offset])
    }

    /// `(occupied, free)` slot counts.
    pub fn counts(&self) -> (usize, usize) {
        (self.len, self.free())
    }

    /// Number of occupied elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no elements are occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity across all fragments.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of free slots.
    pub fn free(&self) -> usize {
        self.capacity - self.len
    }

    /// Whether every slot is occupied. An array with no fragments is full.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Number of fragments allocated.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Capacities of all fragments, in allocation order.
    pub fn fragment_capacities(&self) -> &[usize] {
        &self.capacities
    }

    /// The fragment with the given id, if allocated.
    pub fn fragment(&self, id: FragmentId) -> Option<&Fragment<T>> {
        self.fragments.get(id.index())
    }

    /// The configuration this array was built with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// The occupied prefix of each fragment, in logical order.
    ///
    /// Fragments with no occupied slots are not yielded.
    pub fn occupied_slices(&self) -> impl Iterator<Item = &[T]> + '_ {
        let mut remaining = self.len;
        self.fragments.iter().map_while(move |frag| {
            if remaining == 0 {
                return None;
            }
            let take = remaining.min(frag.capacity());
            remaining -= take;
            Some(frag.slice(0, take))
        })
    }

    /// Iterate over occupied elements in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.fragments, self.len)
    }

    /// Iterate mutably over occupied elements in logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.fragments, self.len)
    }

    /// Copy the occupied elements into a contiguous `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        for slice in self.occupied_slices() {
            out.extend_from_slice(slice);
        }
        out
    }

    /// Mark every slot free again. Fragments are kept, so capacity is
    /// unchanged and subsequent appends reuse the existing storage.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Move the fragments out, leaving `self` empty.
    ///
    /// The returned array owns every fragment and reproduces every value
    /// at every index. `self` keeps its configuration but has no fragments,
    /// zero capacity and zero length.
    pub fn take(&mut self) -> Self {
        let config = self.config.clone();
        std::mem::replace(self, Self::empty(config))
    }

    /// Element storage across all fragments, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.fragments.iter().map(|f| f.memory_bytes()).sum()
    }

    /// Snapshot of occupancy and memory figures.
    pub fn metrics(&self) -> ArrayMetrics {
        ArrayMetrics {
            element_type: T::NAME,
            fragment_count: self.fragments.len(),
            occupied: self.len,
            capacity: self.capacity,
            free: self.free(),
            memory_bytes: self.memory_bytes(),
            largest_fragment: self.capacities.iter().copied().max().unwrap_or(0),
            smallest_fragment: self.capacities.iter().copied().min().unwrap_or(0),
        }
    }
}

impl<T: Element> Default for FragmentedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> fmt::Debug for FragmentedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Arrays are equal when their occupied elements are equal, in order.
/// Fragment layout and spare capacity are not compared.
impl<T: Element> PartialEq for FragmentedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Element> Index<usize> for FragmentedArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Element> IndexMut<usize> for FragmentedArray<T> {
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a FragmentedArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Element> IntoIterator for &'a mut FragmentedArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
