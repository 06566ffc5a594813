// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of a single row of equally sized segments.

use kurbo::{Point, Rect, Size};

use crate::resolve;

/// Gap between the thumb and every edge of the segment it rests on.
pub const THUMB_INSET: f64 = 2.0;

/// Layout of `len` segments that split a control's width evenly.
///
/// Nothing here is stored per segment: centers and rectangles are derived from
/// the segment count and the control size, so changing either is a matter of
/// calling [`set_len`](Self::set_len) or [`set_size`](Self::set_size).
///
/// Segment `i` spans `[w * i, w * (i + 1))` horizontally, where `w` is
/// [`segment_width`](Self::segment_width), and its center sits at `w * (i + 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLayout {
    len: usize,
    size: Size,
}

impl SegmentLayout {
    /// Creates a layout of `len` segments across a control of the given `size`.
    #[must_use]
    pub fn new(len: usize, size: Size) -> Self {
        Self {
            len,
            size: clamp_size(size),
        }
    }

    /// Sets the number of segments.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Sets the control size.
    pub fn set_size(&mut self, size: Size) {
        self.size = clamp_size(size);
    }

    /// Number of segments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the layout has no segments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the whole control.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Width shared by every segment, or `0.0` when there are no segments.
    #[must_use]
    pub fn segment_width(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.size.width / self.len as f64
        }
    }

    /// Horizontal center of segment `index`, or `None` if it does not exist.
    #[must_use]
    pub fn center_of(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.segment_width() * (index as f64 + 0.5))
    }

    /// Centers of all segments in index order.
    pub fn centers(&self) -> impl Iterator<Item = f64> {
        let width = self.segment_width();
        (0..self.len).map(move |i| width * (i as f64 + 0.5))
    }

    /// Center of the first segment.
    #[must_use]
    pub fn first_center(&self) -> Option<f64> {
        self.center_of(0)
    }

    /// Center of the last segment.
    #[must_use]
    pub fn last_center(&self) -> Option<f64> {
        self.center_of(self.len.checked_sub(1)?)
    }

    /// Clamps `x` into the closed range between the first and last centers.
    ///
    /// This is the range the thumb center may occupy; it never reaches the raw
    /// edges of the control.
    #[must_use]
    pub fn clamp_center(&self, x: f64) -> Option<f64> {
        let first = self.first_center()?;
        let last = self.last_center()?;
        Some(x.max(first).min(last))
    }

    /// Index of the segment whose center is closest to `x`.
    ///
    /// See [`resolve::nearest_index`] for the tie-breaking rule.
    #[must_use]
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        resolve::nearest_in(x, self.centers())
    }

    /// Index of the segment whose horizontal span contains `x`.
    ///
    /// Returns `None` outside `[0, width)` and when there are no segments.
    #[must_use]
    pub fn index_at_x(&self, x: f64) -> Option<usize> {
        let width = self.segment_width();
        if width <= 0.0 || !(0.0..self.size.width).contains(&x) {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The ratio is non-negative and clamped to bounds immediately after the cast"
        )]
        let i = (x / width) as usize;
        Some(i.min(self.len - 1))
    }

    /// Rectangle covered by segment `index`, spanning the full control height.
    #[must_use]
    pub fn segment_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.len {
            return None;
        }
        let width = self.segment_width();
        let x0 = width * index as f64;
        Some(Rect::new(x0, 0.0, x0 + width, self.size.height))
    }

    /// Frame of the thumb when its center sits at `center_x`.
    ///
    /// The thumb is one segment wide minus [`THUMB_INSET`] on each side and is
    /// vertically centered. Dimensions collapse to zero rather than going negative.
    #[must_use]
    pub fn thumb_rect_at(&self, center_x: f64) -> Rect {
        let thumb = Size::new(
            (self.segment_width() - THUMB_INSET * 2.0).max(0.0),
            (self.size.height - THUMB_INSET * 2.0).max(0.0),
        );
        Rect::from_center_size(Point::new(center_x, self.size.height / 2.0), thumb)
    }
}

fn clamp_size(size: Size) -> Size {
    // Sizes are expected to be finite. Catch NaNs (and infinities) in
    // debug builds so misuse does not go unnoticed.
    debug_assert!(
        size.width.is_finite() && size.height.is_finite(),
        "SegmentLayout sizes must be finite; got {size:?}"
    );
    // Clamp finite negative values to `0.0`.
    Size::new(
        if size.width.is_sign_negative() {
            0.0
        } else {
            size.width
        },
        if size.height.is_sign_negative() {
            0.0
        } else {
            size.height
        },
    )
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size};

    use super::{SegmentLayout, THUMB_INSET};

    #[test]
    fn centers_split_width_evenly() {
        let layout = SegmentLayout::new(3, Size::new(300.0, 40.0));
        assert_eq!(layout.segment_width(), 100.0);
        assert_eq!(layout.centers().collect::<Vec<_>>(), [50.0, 150.0, 250.0]);
        assert_eq!(layout.center_of(1), Some(150.0));
        assert_eq!(layout.center_of(3), None);
        assert_eq!(layout.first_center(), Some(50.0));
        assert_eq!(layout.last_center(), Some(250.0));
    }

    #[test]
    fn centers_follow_the_half_offset_rule() {
        let layout = SegmentLayout::new(7, Size::new(343.0, 32.0));
        let width = 343.0 / 7.0;
        for (i, center) in layout.centers().enumerate() {
            assert_eq!(center, width * (i as f64 + 0.5));
        }
    }

    #[test]
    fn empty_layout_has_no_segments() {
        let layout = SegmentLayout::new(0, Size::new(300.0, 40.0));
        assert!(layout.is_empty());
        assert_eq!(layout.segment_width(), 0.0);
        assert_eq!(layout.centers().count(), 0);
        assert_eq!(layout.first_center(), None);
        assert_eq!(layout.last_center(), None);
        assert_eq!(layout.clamp_center(10.0), None);
        assert_eq!(layout.index_at_x(10.0), None);
        assert_eq!(layout.segment_rect(0), None);
        assert_eq!(layout.nearest_index(10.0), None);
    }

    #[test]
    fn clamp_stops_at_outer_centers() {
        let layout = SegmentLayout::new(3, Size::new(300.0, 40.0));
        assert_eq!(layout.clamp_center(-500.0), Some(50.0));
        assert_eq!(layout.clamp_center(170.0), Some(170.0));
        assert_eq!(layout.clamp_center(299.0), Some(250.0));
    }

    #[test]
    fn index_at_x_is_half_open() {
        let layout = SegmentLayout::new(3, Size::new(300.0, 40.0));
        assert_eq!(layout.index_at_x(0.0), Some(0));
        assert_eq!(layout.index_at_x(99.9), Some(0));
        assert_eq!(layout.index_at_x(100.0), Some(1));
        assert_eq!(layout.index_at_x(299.9), Some(2));
        assert_eq!(layout.index_at_x(300.0), None);
        assert_eq!(layout.index_at_x(-0.1), None);
    }

    #[test]
    fn segment_and_thumb_rects() {
        let layout = SegmentLayout::new(3, Size::new(300.0, 40.0));
        assert_eq!(
            layout.segment_rect(2),
            Some(Rect::new(200.0, 0.0, 300.0, 40.0))
        );
        let thumb = layout.thumb_rect_at(150.0);
        assert_eq!(
            thumb,
            Rect::new(
                100.0 + THUMB_INSET,
                THUMB_INSET,
                200.0 - THUMB_INSET,
                40.0 - THUMB_INSET
            )
        );
    }

    #[test]
    fn thumb_collapses_instead_of_inverting() {
        let layout = SegmentLayout::new(0, Size::new(300.0, 3.0));
        let thumb = layout.thumb_rect_at(0.0);
        assert_eq!(thumb.width(), 0.0);
        assert_eq!(thumb.height(), 0.0);
    }

    #[test]
    fn negative_sizes_are_clamped_to_zero() {
        let mut layout = SegmentLayout::new(2, Size::new(-5.0, 10.0));
        assert_eq!(layout.size(), Size::new(0.0, 10.0));

        layout.set_size(Size::new(100.0, -1.0));
        assert_eq!(layout.size(), Size::new(100.0, 0.0));
        assert_eq!(layout.center_of(1), Some(75.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sizes must be finite")]
    fn nan_size_at_construction_is_caught_in_debug() {
        let _ = SegmentLayout::new(3, Size::new(f64::NAN, 40.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sizes must be finite")]
    fn infinite_size_on_resize_is_caught_in_debug() {
        let mut layout = SegmentLayout::new(3, Size::new(300.0, 40.0));
        layout.set_size(Size::new(300.0, f64::INFINITY));
    }
}
