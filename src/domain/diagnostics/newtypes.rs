// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// History Capacity Bounds
// =============================================================================

/// Transition history bounds (16 to 4096 records).
pub mod history_capacity_bounds {
    /// Minimum history capacity.
    pub const MIN: usize = 16;
    /// Maximum history capacity.
    pub const MAX: usize = 4096;
    /// Default history capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// HistoryCapacity
// =============================================================================

/// Number of viewer transitions retained in the diagnostics history.
///
/// Values outside the valid range are clamped.
///
/// # Example
///
/// ```ignore
/// let capacity = HistoryCapacity::new(100_000);
/// assert_eq!(capacity.value(), 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new history capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_capacity_bounds::MIN, history_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}
