// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segmented Control: the renderer-agnostic core of a segmented picker.
//!
//! A segmented control splits its width into equally sized, titled segments. A
//! highlighted thumb rests on the selected segment. Users either tap a segment
//! or drag the thumb, which snaps to the nearest segment on release.
//!
//! The core concepts are:
//!
//! - [`SegmentLayout`]: even segment geometry derived from a segment count and
//!   a control size, with centers, rectangles, and the thumb frame.
//! - [`nearest_index`]: the resolver that maps an x coordinate to the segment
//!   whose center is closest, lowest index on ties.
//! - [`DragState`]: the drag state machine. It keeps the thumb between the
//!   outermost centers and decides whether a release should notify.
//! - [`TapState`]: press and release tracking with movement and time tolerances.
//! - [`SegmentedControl`]: the controller tying layout, gestures, selection
//!   commits, and a weakly held [`SelectionListener`] together.
//!
//! This crate does **not** draw. A host implements [`ThumbPresenter`] to render
//! the track, labels, and thumb, and is responsible for:
//!
//! - Feeding pointer events through [`SegmentedControl::pointer_down`] and friends,
//!   or driving [`SegmentedControl::begin_drag`] and [`SegmentedControl::tap`]
//!   from its own gesture recognizers.
//! - Running the thumb animations requested through
//!   [`ThumbPresenter::animate_thumb`].
//! - Reporting each finished animation back with
//!   [`SegmentedControl::animation_finished`]. Listeners are only told about a
//!   selection at that point.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Rect, Size, Vec2};
//! use segmented_control::{
//!     AnimationRequest, AnimationTicket, SegmentRegion, SegmentedControl, StyleConfig,
//!     ThumbPresenter,
//! };
//!
//! #[derive(Default)]
//! struct Headless {
//!     center_x: f64,
//!     in_flight: Option<AnimationTicket>,
//! }
//!
//! impl ThumbPresenter for Headless {
//!     fn thumb_center_x(&self) -> f64 {
//!         self.center_x
//!     }
//!     fn place_thumb(&mut self, frame: Rect) {
//!         self.center_x = frame.center().x;
//!     }
//!     fn set_thumb_title(&mut self, _title: &str) {}
//!     fn animate_thumb(&mut self, request: &AnimationRequest<'_>) {
//!         self.center_x = request.to_center_x;
//!         self.in_flight = Some(request.ticket);
//!     }
//!     fn layout_segments(&mut self, _regions: &[SegmentRegion<'_>]) {}
//!     fn apply_style(&mut self, _style: &StyleConfig) {}
//! }
//!
//! let mut control = SegmentedControl::new(
//!     Size::new(300.0, 40.0),
//!     ["Apple", "Banana", "Orange"],
//!     Headless::default(),
//! );
//! let selected = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&selected);
//! let listener = Rc::new(move |index: usize| sink.set(Some(index)));
//! control.set_listener(&listener);
//!
//! // Drag the thumb from Apple (center 50) to x = 170, then let go.
//! control.begin_drag();
//! control.drag_to(Vec2::new(120.0, 0.0));
//! control.end_drag();
//! assert_eq!(control.committed_index(), 1);
//! assert_eq!(selected.get(), None);
//!
//! // The host reports the snap animation finished.
//! let ticket = control.presenter_mut().in_flight.take().unwrap();
//! control.animation_finished(ticket);
//! assert_eq!(selected.get(), Some(1));
//! ```
//!
//! All coordinates are control-local logical pixels, with the origin at the
//! control's top left corner.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod commit;
mod control;
mod drag;
mod hit;
mod layout;
mod listener;
mod presenter;
mod resolve;
mod style;
mod tap;

pub use commit::{AnimationTicket, PendingCommit};
pub use control::{Interactions, SegmentedControl, ThumbState};
pub use drag::{DragBegin, DragRelease, DragSession, DragState};
pub use hit::{ControlHit, HitParams, hit_test, segment_at};
pub use layout::{SegmentLayout, THUMB_INSET};
pub use listener::SelectionListener;
pub use presenter::{AnimationRequest, SegmentRegion, ThumbPresenter};
pub use resolve::nearest_index;
pub use style::{FontSpec, FontWeight, StyleConfig, ThumbAnimation};
pub use tap::{PointerId, Press, TapResult, TapState, TapThresholds};
