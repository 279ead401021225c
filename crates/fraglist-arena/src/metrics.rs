//! Point-in-time storage metrics for a fragmented array.
//!
//! [`ArrayMetrics`] captures occupancy and memory data, enabling
//! telemetry and growth-policy decisions without walking the array.

/// Occupancy and memory metrics for one array, taken at a single instant.
///
/// Produced by [`FragmentedArray::metrics`](crate::FragmentedArray::metrics).
/// An empty array reports all zeroes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayMetrics {
    /// Element type name (e.g. `"f32"`). Empty in `Default`.
    pub element_type: &'static str,
    /// Number of fragments allocated.
    pub fragment_count: usize,
    /// Number of occupied elements.
    pub occupied: usize,
    /// Total capacity across all fragments.
    pub capacity: usize,
    /// Free slots: `capacity - occupied`.
    pub free: usize,
    /// Element storage across all fragments, in bytes.
    pub memory_bytes: usize,
    /// Capacity of the largest fragment, or 0 with no fragments.
    pub largest_fragment: usize,
    /// Capacity of the smallest fragment, or 0 with no fragments.
    pub smallest_fragment: usize,
}

impl ArrayMetrics {
    /// Fraction of capacity in use, in `[0, 1]`. An array with no capacity
    /// reports 0.
    pub fn utilisation(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.occupied as f64 / self.capacity as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = ArrayMetrics::default();
        assert_eq!(m.fragment_count, 0);
        assert_eq!(m.occupied, 0);
        assert_eq!(m.capacity, 0);
        assert_eq!(m.free, 0);
        assert_eq!(m.memory_bytes, 0);
        assert_eq!(m.utilisation(), 0.0);
    }

    #[test]
    fn utilisation_is_occupied_over_capacity() {
        let m = ArrayMetrics {
            occupied: 3,
            capacity: 4,
            free: 1,
            ..ArrayMetrics::default()
        };
        assert_eq!(m.utilisation(), 0.75);
    }
}
