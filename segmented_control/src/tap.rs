// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition on segments.
//!
//! A tap is a press and release on a segment. Labels sit still while the thumb
//! animates over them, but a finger rarely lifts exactly where it landed, so a
//! release over a *different* segment still counts as a tap on the pressed one
//! when the pointer stayed within the configured spatial and temporal tolerance.
//!
//! ## Tap Rules
//!
//! 1. **Same Segment**: press and release on the same segment always taps it.
//! 2. **Different Segment with Thresholds**: the pressed segment is tapped if:
//!    - the pointer never strayed past the movement threshold during `on_move`,
//!    - `pointer_distance <= movement` at release (if configured),
//!    - `elapsed_time <= time` at release (if configured).
//! 3. **Different Segment without Thresholds**: no tap.
//! 4. **No Active Press**, or a release from another pointer: no tap.
//!
//! Only one press is tracked at a time; a segmented control has a single thumb
//! and a single selection.
//!
//! ```
//! use kurbo::Point;
//! use segmented_control::{TapResult, TapState};
//!
//! let mut taps = TapState::new();
//! taps.on_down(None, 2, Point::new(260.0, 20.0), 1000);
//! let result = taps.on_up(None, Some(2), Point::new(262.0, 21.0), 1060);
//! assert_eq!(result, TapResult::Tap(2));
//! ```

use core::num::NonZeroU64;

use kurbo::Point;

/// Pointer identifier.
pub type PointerId = NonZeroU64;

/// Pointer assumed when the host does not distinguish pointers.
pub(crate) const PRIMARY_POINTER: PointerId = NonZeroU64::MIN;

/// Tolerances applied when a press and its release land on different segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapThresholds {
    /// Distance before rejecting the press as a tap, or `None` for unlimited.
    pub movement: Option<f64>,
    /// Time in milliseconds before rejecting the press as a tap, or `None` for unlimited.
    pub time: Option<u64>,
}

impl Default for TapThresholds {
    /// A 5-pixel spatial and 100ms temporal tolerance.
    fn default() -> Self {
        Self {
            movement: Some(5.0),
            time: Some(100),
        }
    }
}

/// An active press on a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
    /// Pointer holding the press.
    pub pointer_id: PointerId,
    /// Segment that was pressed.
    pub segment: usize,
    /// Pointer position at press time.
    pub down_position: Point,
    /// Timestamp of the press in milliseconds.
    pub down_time: u64,
    /// True once the movement threshold was exceeded.
    pub distance_exceeded: bool,
}

/// Result of a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// The segment was tapped.
    Tap(usize),
    /// No tap; carries the pressed segment if there was an active press.
    Suppressed(Option<usize>),
}

/// Tap recognizer for a single pointer at a time.
#[derive(Clone, Debug, Default)]
pub struct TapState {
    press: Option<Press>,
    /// Tolerances for releases over a different segment.
    pub thresholds: TapThresholds,
}

impl TapState {
    /// Create a recognizer with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recognizer with custom thresholds.
    #[must_use]
    pub fn with_thresholds(thresholds: TapThresholds) -> Self {
        Self {
            press: None,
            thresholds,
        }
    }

    /// Record a press on `segment`.
    ///
    /// Returns `false` and ignores the press while another pointer holds one.
    pub fn on_down(
        &mut self,
        pointer_id: Option<PointerId>,
        segment: usize,
        position: Point,
        timestamp: u64,
    ) -> bool {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        if self
            .press
            .is_some_and(|press| press.pointer_id != pointer_id)
        {
            return false;
        }
        self.press = Some(Press {
            pointer_id,
            segment,
            down_position: position,
            down_time: timestamp,
            distance_exceeded: false,
        });
        true
    }

    /// Track pointer movement during a press.
    ///
    /// Returns the pressed segment the first time movement exceeds the threshold.
    pub fn on_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<usize> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        let press = self.press.as_mut()?;
        if press.pointer_id != pointer_id || press.distance_exceeded {
            return None;
        }
        let threshold = self.thresholds.movement?;
        if press.down_position.distance(position) > threshold {
            press.distance_exceeded = true;
            Some(press.segment)
        } else {
            None
        }
    }

    /// Process a release over `current_segment` (or over no segment at all).
    pub fn on_up(
        &mut self,
        pointer_id: Option<PointerId>,
        current_segment: Option<usize>,
        position: Point,
        timestamp: u64,
    ) -> TapResult {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        let press = match self.press {
            Some(press) if press.pointer_id == pointer_id => press,
            _ => return TapResult::Suppressed(None),
        };
        self.press = None;

        // Fast path: same segment
        if current_segment == Some(press.segment) {
            return TapResult::Tap(press.segment);
        }

        let TapThresholds { movement, time } = self.thresholds;
        if (movement.is_none() && time.is_none()) || press.distance_exceeded {
            return TapResult::Suppressed(Some(press.segment));
        }

        let distance_ok =
            movement.is_none_or(|threshold| press.down_position.distance(position) <= threshold);
        let time_ok = time
            .is_none_or(|threshold| timestamp.saturating_sub(press.down_time) <= threshold);

        if distance_ok && time_ok {
            TapResult::Tap(press.segment)
        } else {
            TapResult::Suppressed(Some(press.segment))
        }
    }

    /// Cancel the press held by `pointer_id`.
    ///
    /// Returns `true` if a press was canceled.
    pub fn cancel(&mut self, pointer_id: Option<PointerId>) -> bool {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        if self.is_pressed(Some(pointer_id)) {
            self.press = None;
            true
        } else {
            false
        }
    }

    /// Drop any active press.
    pub fn clear(&mut self) {
        self.press = None;
    }

    /// Check if `pointer_id` holds the active press.
    #[must_use]
    pub fn is_pressed(&self, pointer_id: Option<PointerId>) -> bool {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        self.press
            .is_some_and(|press| press.pointer_id == pointer_id)
    }

    /// The active press, if any.
    #[must_use]
    pub fn press(&self) -> Option<&Press> {
        self.press.as_ref()
    }
}
