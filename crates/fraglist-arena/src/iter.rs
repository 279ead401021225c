//! Logical-order iterators over occupied elements.

use std::iter::FusedIterator;
use std::slice;

use fraglist_core::Element;

use crate::fragment::Fragment;

/// Shared iterator over the occupied elements of a fragmented array.
///
/// Created by [`FragmentedArray::iter`](crate::FragmentedArray::iter).
/// Walks fragments in allocation order and stops after `len` elements,
/// so unoccupied tail slots are never yielded.
#[derive(Clone, Debug)]
pub struct Iter<'a, T: Element> {
    fragments: slice::Iter<'a, Fragment<T>>,
    current: slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T: Element> Iter<'a, T> {
    pub(crate) fn new(fragments: &'a [Fragment<T>], len: usize) -> Self {
        Self {
            fragments: fragments.iter(),
            current: slice::Iter::default(),
            remaining: len,
        }
    }
}

impl<'a, T: Element> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining == 0 {
                return None;
            }
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            self.current = self.fragments.next()?.as_slice().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Element> ExactSizeIterator for Iter<'_, T> {}

impl<T: Element> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over the occupied elements of a fragmented array.
///
/// Created by [`FragmentedArray::iter_mut`](crate::FragmentedArray::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T: Element> {
    fragments: slice::IterMut<'a, Fragment<T>>,
    current: slice::IterMut<'a, T>,
    remaining: usize,
}

impl<'a, T: Element> IterMut<'a, T> {
    pub(crate) fn new(fragments: &'a mut [Fragment<T>], len: usize) -> Self {
        Self {
            fragments: fragments.iter_mut(),
            current: slice::IterMut::default(),
            remaining: len,
        }
    }
}

impl<'a, T: Element> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining == 0 {
                return None;
            }
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            self.current = self.fragments.next()?.as_mut_slice().iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Element> ExactSizeIterator for IterMut<'_, T> {}

impl<T: Element> FusedIterator for IterMut<'_, T> {}
