// SPDX-License-Identifier: MPL-2.0
//! Clock port definition.
//!
//! The viewer never calls `Instant::now()` directly so that timing can be
//! driven by a fake clock in tests.

use std::time::Instant;

/// Source of monotonic time for the viewer.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
