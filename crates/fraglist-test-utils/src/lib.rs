//! Test utilities for fraglist development.
//!
//! Provides an [`ArrayBuilder`] for constructing arrays with a chosen
//! fragment layout, plus the standard [`fixtures`] used across the
//! workspace's integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{canonical_scenario, sequential};

use fraglist_arena::{ArrayConfig, ArrayError, FragmentedArray};
use fraglist_core::Element;

/// Builder for arrays with a preconfigured fragment layout and contents.
///
/// Fragments are grown in the order given, then values are appended
/// without further growth. `build` fails if the values do not fit.
pub struct ArrayBuilder<T: Element> {
    config: ArrayConfig,
    fragments: Vec<usize>,
    values: Vec<T>,
}

impl<T: Element> ArrayBuilder<T> {
    pub fn new() -> Self {
        Self {
            config: ArrayConfig::default(),
            fragments: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Use `config` instead of the default configuration.
    pub fn config(mut self, config: ArrayConfig) -> Self {
        self.config = config;
        self
    }

    /// Add one fragment of the given capacity.
    pub fn fragment(mut self, capacity: usize) -> Self {
        self.fragments.push(capacity);
        self
    }

    /// Add one fragment per entry in `capacities`.
    pub fn fragments(mut self, capacities: &[usize]) -> Self {
        self.fragments.extend_from_slice(capacities);
        self
    }

    /// Values to append after all fragments are grown.
    pub fn values(mut self, values: &[T]) -> Self {
        self.values.extend_from_slice(values);
        self
    }

    pub fn build(self) -> Result<FragmentedArray<T>, ArrayError> {
        let mut arr = FragmentedArray::with_config(self.config)?;
        for capacity in self.fragments {
            arr.grow(capacity)?;
        }
        arr.try_extend(self.values)?;
        Ok(arr)
    }
}

impl<T: Element> Default for ArrayBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
