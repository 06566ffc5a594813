// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-segment resolution.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Returns the index of the center closest to `x`.
///
/// Closeness is the absolute difference between `x` and each center. Ties go to
/// the lowest index, and an empty list resolves to `None`.
///
/// ```
/// use segmented_control::nearest_index;
///
/// assert_eq!(nearest_index(20.0, &[10.0, 30.0, 50.0]), Some(0));
/// assert_eq!(nearest_index(41.0, &[10.0, 30.0, 50.0]), Some(2));
/// assert_eq!(nearest_index(41.0, &[]), None);
/// ```
#[must_use]
pub fn nearest_index(x: f64, centers: &[f64]) -> Option<usize> {
    nearest_in(x, centers.iter().copied())
}

pub(crate) fn nearest_in(x: f64, centers: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, center) in centers.into_iter().enumerate() {
        let distance = (center - x).abs();
        // Strict comparison keeps the earliest index on ties.
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}
