// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the control core and whatever draws it.

use kurbo::Rect;

use crate::commit::AnimationTicket;
use crate::style::{StyleConfig, ThumbAnimation};

/// Hit-testable region of one segment, in control-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentRegion<'a> {
    /// Segment index.
    pub index: usize,
    /// Segment title, drawn on the base track.
    pub title: &'a str,
    /// Region covered by the segment.
    pub rect: Rect,
}

/// An animated thumb move requested by a commit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest<'a> {
    /// Ticket to hand back through
    /// [`SegmentedControl::animation_finished`](crate::SegmentedControl::animation_finished).
    pub ticket: AnimationTicket,
    /// Segment the thumb moves to.
    pub index: usize,
    /// Title the thumb shows once it lands.
    pub title: &'a str,
    /// Thumb center when the request was made.
    pub from_center_x: f64,
    /// Thumb center at the end of the move.
    pub to_center_x: f64,
    /// Thumb frame at the end of the move.
    pub frame: Rect,
    /// Curve to animate with.
    pub animation: ThumbAnimation,
}

/// Rendering collaborator driven by a [`SegmentedControl`](crate::SegmentedControl).
///
/// The control never draws. It reports geometry and selection facts here and
/// expects animation completion to be reported back later, on the same thread,
/// through [`SegmentedControl::animation_finished`](crate::SegmentedControl::animation_finished).
pub trait ThumbPresenter {
    /// Current visual center of the thumb, including any animation in progress.
    fn thumb_center_x(&self) -> f64;

    /// Move the thumb to `frame` immediately, cancelling any animation in progress.
    fn place_thumb(&mut self, frame: Rect);

    /// Show `title` on the thumb.
    fn set_thumb_title(&mut self, title: &str);

    /// Start animating the thumb as described by `request`.
    fn animate_thumb(&mut self, request: &AnimationRequest<'_>);

    /// Replace the segment regions after a layout change.
    fn layout_segments(&mut self, regions: &[SegmentRegion<'_>]);

    /// Apply a complete style in one update.
    fn apply_style(&mut self, style: &StyleConfig);
}
