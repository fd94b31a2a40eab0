// SPDX-License-Identifier: MPL-2.0
//! Float assertion helpers shared by unit tests.

pub use approx::assert_abs_diff_eq;

/// Tolerance for fractions and pixel values computed in `f32`.
pub const F32_EPSILON: f32 = 1e-6;
