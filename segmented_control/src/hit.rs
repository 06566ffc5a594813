// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing against the thumb and segment regions.
//!
//! The thumb floats above the segment row, so it is tested first. Segments are
//! tested by their exact horizontal span before falling back to the fill
//! tolerance, which lets a touch that lands just outside the control still pick
//! the nearest segment.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::layout::SegmentLayout;

/// Parameters controlling hit tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Tolerance in control-local units around every region.
    ///
    /// This is typically used to slightly inflate regions for touch input.
    pub fill_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            fill_tolerance: 0.0,
        }
    }
}

/// What a point in control-local coordinates landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlHit {
    /// The thumb, which is where drags originate.
    Thumb,
    /// The segment with the given index.
    Segment(usize),
}

/// Distance from `pt` to `rect` if `pt` lies within the tolerance-inflated rect.
///
/// Interior points have distance `0.0`.
pub(crate) fn hit_rect(rect: Rect, pt: Point, params: &HitParams) -> Option<f64> {
    // Expand the rect by fill_tolerance on all sides for a near-miss hit.
    let inflated = if params.fill_tolerance > 0.0 {
        rect.inflate(params.fill_tolerance, params.fill_tolerance)
    } else {
        rect
    };
    if !inflated.contains(pt) {
        return None;
    }
    let dx = if pt.x < rect.x0 {
        rect.x0 - pt.x
    } else if pt.x > rect.x1 {
        pt.x - rect.x1
    } else {
        0.0
    };
    let dy = if pt.y < rect.y0 {
        rect.y0 - pt.y
    } else if pt.y > rect.y1 {
        pt.y - rect.y1
    } else {
        0.0
    };
    Some((dx * dx + dy * dy).sqrt())
}

/// Segment under `pt`, ignoring the thumb.
///
/// Among tolerant hits the closest segment wins; ties keep the lower index.
#[must_use]
pub fn segment_at(layout: &SegmentLayout, pt: Point, params: &HitParams) -> Option<usize> {
    if (0.0..layout.size().height).contains(&pt.y)
        && let Some(index) = layout.index_at_x(pt.x)
    {
        return Some(index);
    }
    let mut best: Option<(usize, f64)> = None;
    for index in 0..layout.len() {
        let Some(rect) = layout.segment_rect(index) else {
            break;
        };
        if let Some(distance) = hit_rect(rect, pt, params)
            && best.is_none_or(|(_, best_distance)| distance < best_distance)
        {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Hit test `pt` against a thumb occupying `thumb` and the segments of `layout`.
///
/// Returns `None` when nothing was hit, including every point of a control with
/// no segments.
#[must_use]
pub fn hit_test(
    layout: &SegmentLayout,
    thumb: Rect,
    pt: Point,
    params: &HitParams,
) -> Option<ControlHit> {
    if layout.is_empty() {
        return None;
    }
    if hit_rect(thumb, pt, params).is_some() {
        return Some(ControlHit::Thumb);
    }
    segment_at(layout, pt, params).map(ControlHit::Segment)
}
