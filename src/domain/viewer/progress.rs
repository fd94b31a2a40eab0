// SPDX-License-Identifier: MPL-2.0
//! Progress segments.
//!
//! A purely derived projection of the viewer state: one segment per item of
//! the active collection. Switching collections replaces the whole set.

/// Visual state of one progress segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentState {
    /// Item already shown, rendered fully filled.
    Complete,
    /// The active item, filled to `fraction` (`0.0..=1.0`).
    Active { fraction: f32 },
    /// Item not yet reached, rendered empty.
    Pending,
}

impl SegmentState {
    /// Fill level in `0.0..=1.0`.
    #[must_use]
    pub fn fill(&self) -> f32 {
        match self {
            SegmentState::Complete => 1.0,
            SegmentState::Active { fraction } => *fraction,
            SegmentState::Pending => 0.0,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, SegmentState::Active { .. })
    }
}

/// Builds the segment list for a collection of `item_count` items where
/// `active` is playing at `fraction`.
///
/// The fraction is clamped; an `active` index past the end yields only
/// complete segments.
#[must_use]
pub fn segments(item_count: usize, active: usize, fraction: f32) -> Vec<SegmentState> {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };

    (0..item_count)
        .map(|index| match index.cmp(&active) {
            std::cmp::Ordering::Less => SegmentState::Complete,
            std::cmp::Ordering::Equal => SegmentState::Active { fraction },
            std::cmp::Ordering::Greater => SegmentState::Pending,
        })
        .collect()
}
