// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-snap state machine for the thumb.
//!
//! A drag moves through two observable states:
//!
//! - **Idle**: no session. [`DragState::begin`] resolves the segment nearest to
//!   the thumb; if there is none the gesture is rejected and the state stays idle.
//! - **Dragging**: a [`DragSession`] remembers where the thumb started. Every
//!   [`DragState::update`] offsets that start by the pointer translation and clamps
//!   the result between the first and last segment centers.
//!
//! [`DragState::finish`] ends the session for release, cancel, and failure alike.
//! It resolves the nearest segment to the final thumb center and reports whether
//! the host listener should hear about it: only when the resolved segment differs
//! from the one the drag started on.

use kurbo::Vec2;

use crate::layout::SegmentLayout;

/// Bookkeeping for a drag in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Thumb center when the drag began.
    pub start_center_x: f64,
    /// Segment nearest the thumb when the drag began.
    pub start_index: Option<usize>,
}

/// Outcome of [`DragState::begin`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragBegin {
    /// A session is active and the thumb follows subsequent updates.
    Started(DragSession),
    /// No segment could be resolved; the gesture should be canceled.
    Rejected,
}

/// Segment a finished drag settles on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragRelease {
    /// Segment to commit to.
    pub index: usize,
    /// Whether the listener should be told about the selection.
    pub notify: bool,
}

/// Drag gesture state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging(DragSession),
}

impl DragState {
    /// Begin a drag with the thumb currently centered at `thumb_center_x`.
    ///
    /// Beginning while already dragging starts a fresh session.
    pub fn begin(&mut self, layout: &SegmentLayout, thumb_center_x: f64) -> DragBegin {
        let Some(start_index) = layout.nearest_index(thumb_center_x) else {
            *self = Self::Idle;
            return DragBegin::Rejected;
        };
        let session = DragSession {
            start_center_x: thumb_center_x,
            start_index: Some(start_index),
        };
        *self = Self::Dragging(session);
        DragBegin::Started(session)
    }

    /// Apply the pointer `translation` since the drag began.
    ///
    /// Returns the clamped thumb center, or `None` when no drag is active.
    /// Only the horizontal component of the translation is used.
    pub fn update(&self, layout: &SegmentLayout, translation: Vec2) -> Option<f64> {
        let Self::Dragging(session) = self else {
            return None;
        };
        layout.clamp_center(session.start_center_x + translation.x)
    }

    /// End the drag with the thumb centered at `current_center_x`.
    ///
    /// Returns `None` when no drag was active. Otherwise the state returns to idle
    /// and the release says which segment to commit to.
    pub fn finish(&mut self, layout: &SegmentLayout, current_center_x: f64) -> Option<DragRelease> {
        let Self::Dragging(session) = core::mem::take(self) else {
            return None;
        };
        match layout.nearest_index(current_center_x) {
            Some(index) => Some(DragRelease {
                index,
                notify: Some(index) != session.start_index,
            }),
            None => session.start_index.map(|index| DragRelease {
                index,
                notify: false,
            }),
        }
    }

    /// Drop any active session without resolving it.
    ///
    /// Returns `true` if a session was dropped.
    pub fn abandon(&mut self) -> bool {
        matches!(core::mem::take(self), Self::Dragging(_))
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{DragBegin, DragRelease, DragSession, DragState};
    use crate::layout::SegmentLayout;

    fn fruit_layout() -> SegmentLayout {
        SegmentLayout::new(3, Size::new(300.0, 40.0))
    }

    #[test]
    fn begin_records_start_and_nearest_segment() {
        let layout = fruit_layout();
        let mut drag = DragState::default();
        let begin = drag.begin(&layout, 140.0);
        assert_eq!(
            begin,
            DragBegin::Started(DragSession {
                start_center_x: 140.0,
                start_index: Some(1),
            })
        );
        assert!(drag.is_dragging());
    }

    #[test]
    fn begin_without_segments_is_rejected() {
        let layout = SegmentLayout::new(0, Size::new(300.0, 40.0));
        let mut drag = DragState::default();
        assert_eq!(drag.begin(&layout, 0.0), DragBegin::Rejected);
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(&layout, Vec2::new(10.0, 0.0)), None);
        assert_eq!(drag.finish(&layout, 0.0), None);
    }

    #[test]
    fn update_clamps_to_outer_centers() {
        let layout = fruit_layout();
        let mut drag = DragState::default();
        drag.begin(&layout, 50.0);
        assert_eq!(drag.update(&layout, Vec2::new(120.0, 0.0)), Some(170.0));
        assert_eq!(drag.update(&layout, Vec2::new(10_000.0, 0.0)), Some(250.0));
        assert_eq!(drag.update(&layout, Vec2::new(-10_000.0, 0.0)), Some(50.0));
        // Vertical movement does not matter.
        assert_eq!(drag.update(&layout, Vec2::new(0.0, 500.0)), Some(50.0));
    }

    #[test]
    fn update_without_session_is_ignored() {
        let layout = fruit_layout();
        let drag = DragState::default();
        assert_eq!(drag.update(&layout, Vec2::new(10.0, 0.0)), None);
    }

    #[test]
    fn finish_notifies_only_on_change() {
        let layout = fruit_layout();
        let mut drag = DragState::default();

        drag.begin(&layout, 150.0);
        assert_eq!(
            drag.finish(&layout, 180.0),
            Some(DragRelease {
                index: 1,
                notify: false,
            })
        );
        assert!(!drag.is_dragging());

        drag.begin(&layout, 150.0);
        assert_eq!(
            drag.finish(&layout, 230.0),
            Some(DragRelease {
                index: 2,
                notify: true,
            })
        );
    }

    #[test]
    fn finish_falls_back_to_start_when_segments_vanish() {
        let mut layout = fruit_layout();
        let mut drag = DragState::default();
        drag.begin(&layout, 250.0);
        layout.set_len(0);
        assert_eq!(
            drag.finish(&layout, 250.0),
            Some(DragRelease {
                index: 2,
                notify: false,
            })
        );
    }

    #[test]
    fn abandon_drops_session() {
        let layout = fruit_layout();
        let mut drag = DragState::default();
        assert!(!drag.abandon());
        drag.begin(&layout, 50.0);
        assert!(drag.abandon());
        assert_eq!(drag.session(), None);
    }
}
