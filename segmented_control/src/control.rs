// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The segmented control: layout, gestures, and selection commits in one owner.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::commit::{AnimationTicket, CommitTracker, PendingCommit};
use crate::drag::{DragBegin, DragSession, DragState};
use crate::hit::{self, ControlHit, HitParams};
use crate::layout::SegmentLayout;
use crate::listener::{ListenerSlot, SelectionListener};
use crate::presenter::{AnimationRequest, SegmentRegion, ThumbPresenter};
use crate::style::StyleConfig;
use crate::tap::{PRIMARY_POINTER, PointerId, TapResult, TapState, TapThresholds};

bitflags::bitflags! {
    /// Gestures a control responds to.
    ///
    /// An empty set gives a static control that only moves through
    /// [`SegmentedControl::move_to_item`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Interactions: u8 {
        /// Tapping a segment selects it.
        const TAP  = 0b0000_0001;
        /// Dragging the thumb snaps it to the nearest segment.
        const DRAG = 0b0000_0010;
    }
}

impl Default for Interactions {
    fn default() -> Self {
        Self::TAP | Self::DRAG
    }
}

/// Where the thumb is and which segment it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbState {
    /// Center the thumb is at during a drag, or is animating to otherwise.
    pub current_center_x: f64,
    /// Segment the thumb last committed to.
    pub committed_index: usize,
}

#[derive(Clone, Copy, Debug)]
struct DragPointer {
    id: PointerId,
    origin: Point,
}

/// A row of titled segments with a draggable thumb marking the selection.
///
/// The control owns the titles, the derived [`SegmentLayout`], the gesture state,
/// and a [`ThumbPresenter`] that does the drawing. Hosts either feed raw pointer
/// events through [`pointer_down`](Self::pointer_down) and friends, or drive the
/// gesture entry points ([`begin_drag`](Self::begin_drag), [`drag_to`](Self::drag_to),
/// [`end_drag`](Self::end_drag), [`tap`](Self::tap)) from their own recognizers.
///
/// Every selection goes through a commit: the presenter is asked to animate the
/// thumb and the listener, if any, is told about the selection once the host
/// reports the animation finished via [`animation_finished`](Self::animation_finished).
///
/// Invalid input is never an error. Out-of-range indices, gestures on a control
/// without segments, and stale animation tickets are ignored.
#[derive(Debug)]
pub struct SegmentedControl<P> {
    titles: Vec<String>,
    layout: SegmentLayout,
    thumb: ThumbState,
    drag: DragState,
    drag_pointer: Option<DragPointer>,
    taps: TapState,
    commits: CommitTracker,
    listener: ListenerSlot,
    style: StyleConfig,
    interactions: Interactions,
    hit_params: HitParams,
    presenter: P,
}

impl<P: ThumbPresenter> SegmentedControl<P> {
    /// Creates a control of the given `size` with the default style.
    ///
    /// `titles` may be empty, in which case every gesture is a no-op.
    pub fn new<I, S>(size: Size, titles: I, presenter: P) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_style(size, titles, StyleConfig::default(), presenter)
    }

    /// Creates a control of the given `size` and `style`.
    ///
    /// The presenter receives the style, the segment regions, and a thumb resting
    /// on the first segment before this returns.
    pub fn with_style<I, S>(size: Size, titles: I, style: StyleConfig, presenter: P) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        let mut control = Self {
            layout: SegmentLayout::new(titles.len(), size),
            titles,
            thumb: ThumbState {
                current_center_x: 0.0,
                committed_index: 0,
            },
            drag: DragState::Idle,
            drag_pointer: None,
            taps: TapState::new(),
            commits: CommitTracker::default(),
            listener: ListenerSlot::default(),
            style,
            interactions: Interactions::default(),
            hit_params: HitParams::default(),
            presenter,
        };
        control.presenter.apply_style(&control.style);
        control.relayout();
        control
    }

    /// Segment titles in index order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Title of segment `index`.
    #[must_use]
    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns `true` if the control has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Current segment layout.
    #[must_use]
    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    /// Current thumb state.
    #[must_use]
    pub fn thumb(&self) -> ThumbState {
        self.thumb
    }

    /// Segment the thumb last committed to.
    #[must_use]
    pub fn committed_index(&self) -> usize {
        self.thumb.committed_index
    }

    /// Title of the committed segment, or `None` without segments.
    #[must_use]
    pub fn selected_title(&self) -> Option<&str> {
        self.title(self.thumb.committed_index)
    }

    /// Frame of the thumb where the presenter currently shows it.
    #[must_use]
    pub fn thumb_rect(&self) -> Rect {
        self.layout.thumb_rect_at(self.presenter.thumb_center_x())
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Gestures the control responds to.
    #[must_use]
    pub fn interactions(&self) -> Interactions {
        self.interactions
    }

    /// Sets the gestures the control responds to.
    ///
    /// A drag already in progress still finishes normally.
    pub fn set_interactions(&mut self, interactions: Interactions) {
        self.interactions = interactions;
    }

    /// Hit test parameters used for pointer routing.
    #[must_use]
    pub fn hit_params(&self) -> HitParams {
        self.hit_params
    }

    /// Sets the hit test parameters used for pointer routing.
    pub fn set_hit_params(&mut self, params: HitParams) {
        self.hit_params = params;
    }

    /// Tolerances for recognizing taps.
    #[must_use]
    pub fn tap_thresholds(&self) -> TapThresholds {
        self.taps.thresholds
    }

    /// Sets the tolerances for recognizing taps.
    pub fn set_tap_thresholds(&mut self, thresholds: TapThresholds) {
        self.taps.thresholds = thresholds;
    }

    /// The presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presenter, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Register `listener`, replacing any previous one.
    ///
    /// Only a weak reference is kept; dropping the last `Rc` unregisters it.
    pub fn set_listener<L: SelectionListener + 'static>(&mut self, listener: &Rc<L>) {
        self.listener.set(listener);
    }

    /// Unregister the listener.
    pub fn clear_listener(&mut self) {
        self.listener.clear();
    }

    /// Returns `true` if a live listener is registered.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_attached()
    }

    /// Replace the style and hand it to the presenter in one update.
    ///
    /// Only presentation changes; selection and gesture state are untouched.
    pub fn apply_style(&mut self, style: StyleConfig) {
        self.style = style;
        self.presenter.apply_style(&self.style);
    }

    /// Replace the segment titles.
    ///
    /// Any gesture in progress is dropped, the committed index is clamped into the
    /// new range, and the thumb is placed without animation.
    ///
    /// A commit still animating settles immediately: its listener notification, if
    /// any, is delivered now unless its segment no longer exists.
    pub fn set_titles<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles = titles.into_iter().map(Into::into).collect();
        self.layout.set_len(self.titles.len());
        self.relayout();
    }

    /// Resize the control. Behaves like [`set_titles`](Self::set_titles) otherwise.
    pub fn set_size(&mut self, size: Size) {
        self.layout.set_size(size);
        self.relayout();
    }

    fn relayout(&mut self) {
        if self.drag.abandon() {
            debug!("layout changed during a drag; dropping the session");
        }
        self.drag_pointer = None;
        self.taps.clear();
        let in_flight = self.commits.invalidate();

        let committed = self
            .thumb
            .committed_index
            .min(self.titles.len().saturating_sub(1));
        let center = self.layout.center_of(committed).unwrap_or(0.0);
        self.thumb = ThumbState {
            current_center_x: center,
            committed_index: committed,
        };

        let layout = &self.layout;
        let regions: SmallVec<[SegmentRegion<'_>; 8]> = self
            .titles
            .iter()
            .enumerate()
            .filter_map(|(index, title)| {
                Some(SegmentRegion {
                    index,
                    title: title.as_str(),
                    rect: layout.segment_rect(index)?,
                })
            })
            .collect();
        self.presenter.layout_segments(&regions);
        self.presenter.place_thumb(self.layout.thumb_rect_at(center));
        self.presenter
            .set_thumb_title(self.titles.get(committed).map_or("", String::as_str));

        // The thumb was placed without animation, so the commit in flight is done.
        if let Some(settled) = in_flight {
            if settled.index < self.titles.len() {
                debug!(
                    "layout changed while animating to segment {}; settled in place",
                    settled.index
                );
                self.deliver(settled);
            } else {
                debug!(
                    "segment {} is gone after the layout change; dropping its commit",
                    settled.index
                );
            }
        }
    }

    /// What `position` lands on: the thumb (where it is currently shown) or a segment.
    #[must_use]
    pub fn hit_test(&self, position: Point) -> Option<ControlHit> {
        hit::hit_test(&self.layout, self.thumb_rect(), position, &self.hit_params)
    }

    /// Begin dragging the thumb from wherever the presenter currently shows it.
    ///
    /// Rejected when dragging is disabled or there are no segments; the host
    /// should then cancel its gesture recognizer.
    pub fn begin_drag(&mut self) -> DragBegin {
        if !self.interactions.contains(Interactions::DRAG) {
            trace!("drag rejected; dragging is disabled");
            return DragBegin::Rejected;
        }
        let start = self.presenter.thumb_center_x();
        self.drag_pointer = None;
        let begin = self.drag.begin(&self.layout, start);
        match begin {
            DragBegin::Started(session) => {
                self.thumb.current_center_x = start;
                debug!(
                    "drag began at x = {start} near segment {:?}",
                    session.start_index
                );
            }
            DragBegin::Rejected => debug!("drag rejected; no segment near x = {start}"),
        }
        begin
    }

    /// Move the thumb by the pointer `translation` since the drag began.
    ///
    /// The thumb is kept between the first and last segment centers and follows
    /// immediately. Returns the new center, or `None` without an active drag.
    pub fn drag_to(&mut self, translation: Vec2) -> Option<f64> {
        let center = self.drag.update(&self.layout, translation)?;
        trace!("drag moved thumb to x = {center}");
        self.thumb.current_center_x = center;
        self.presenter.place_thumb(self.layout.thumb_rect_at(center));
        Some(center)
    }

    /// Release the drag and snap the thumb to the nearest segment.
    ///
    /// The listener is only notified if that segment differs from the one the drag
    /// started on. Returns the ticket of the snapping animation, or `None` without
    /// an active drag.
    pub fn end_drag(&mut self) -> Option<AnimationTicket> {
        self.drag_pointer = None;
        let release = self
            .drag
            .finish(&self.layout, self.thumb.current_center_x)?;
        debug!(
            "drag released onto segment {} (notify: {})",
            release.index, release.notify
        );
        self.commit(release.index, release.notify)
    }

    /// Cancel the drag. The thumb still settles on the nearest segment.
    pub fn cancel_drag(&mut self) -> Option<AnimationTicket> {
        self.end_drag()
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Select segment `index` as if it was tapped. Always notifies the listener,
    /// even when `index` is already selected.
    ///
    /// Ignored while a drag is in progress; the drag's release decides the selection.
    pub fn tap(&mut self, index: usize) -> Option<AnimationTicket> {
        if !self.interactions.contains(Interactions::TAP) {
            trace!("tap on segment {index} ignored; tapping is disabled");
            return None;
        }
        if self.drag.is_dragging() {
            trace!("tap on segment {index} ignored; a drag is in progress");
            return None;
        }
        debug!("tap on segment {index}");
        self.commit(index, true)
    }

    /// Move the thumb to segment `index` on behalf of the host.
    ///
    /// Out-of-range indices are ignored. The listener hears about the selection
    /// only if `notify` is set.
    pub fn move_to_item(&mut self, index: usize, notify: bool) -> Option<AnimationTicket> {
        self.commit(index, notify)
    }

    /// Move the thumb to segment `index` without notifying the listener.
    pub fn select(&mut self, index: usize) -> Option<AnimationTicket> {
        self.move_to_item(index, false)
    }

    fn commit(&mut self, index: usize, notify: bool) -> Option<AnimationTicket> {
        let (Some(to_center_x), Some(title)) =
            (self.layout.center_of(index), self.titles.get(index))
        else {
            debug!(
                "ignoring commit to segment {index}; control has {} segments",
                self.titles.len()
            );
            return None;
        };
        let pending = self.commits.request(index, notify);
        let request = AnimationRequest {
            ticket: pending.ticket,
            index,
            title,
            from_center_x: self.presenter.thumb_center_x(),
            to_center_x,
            frame: self.layout.thumb_rect_at(to_center_x),
            animation: self.style.animation,
        };
        self.thumb = ThumbState {
            current_center_x: to_center_x,
            committed_index: index,
        };
        self.presenter.animate_thumb(&request);
        Some(pending.ticket)
    }

    /// The commit whose animation is still in flight, if any.
    #[must_use]
    pub fn pending_commit(&self) -> Option<&PendingCommit> {
        self.commits.pending()
    }

    /// Report that the animation for `ticket` finished.
    ///
    /// Notifies the listener if the commit asked for it. Returns `false` for a
    /// ticket that was superseded or already reported.
    pub fn animation_finished(&mut self, ticket: AnimationTicket) -> bool {
        let Some(done) = self.commits.complete(ticket) else {
            trace!("ignoring stale animation ticket {}", ticket.get());
            return false;
        };
        self.deliver(done);
        true
    }

    fn deliver(&self, done: PendingCommit) {
        if done.notify && !self.listener.notify(done.index) {
            trace!("segment {} selected with no listener attached", done.index);
        }
    }

    /// Route a pointer press at `position` (control-local coordinates).
    ///
    /// A press on the thumb starts a drag; a press on a segment starts a tap.
    /// Returns what was hit, or `None` if the press was ignored.
    pub fn pointer_down(
        &mut self,
        pointer_id: Option<PointerId>,
        position: Point,
        timestamp: u64,
    ) -> Option<ControlHit> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        if self.drag.is_dragging() || self.taps.press().is_some() {
            trace!("ignoring press from pointer {pointer_id}; a gesture is already active");
            return None;
        }
        let hit = self.hit_test(position)?;
        match hit {
            ControlHit::Thumb if self.interactions.contains(Interactions::DRAG) => {
                if let DragBegin::Started(_) = self.begin_drag() {
                    self.drag_pointer = Some(DragPointer {
                        id: pointer_id,
                        origin: position,
                    });
                }
            }
            ControlHit::Thumb => {
                if let Some(segment) = hit::segment_at(&self.layout, position, &self.hit_params) {
                    self.press_segment(pointer_id, segment, position, timestamp);
                }
            }
            ControlHit::Segment(segment) => {
                self.press_segment(pointer_id, segment, position, timestamp);
            }
        }
        Some(hit)
    }

    fn press_segment(
        &mut self,
        pointer_id: PointerId,
        segment: usize,
        position: Point,
        timestamp: u64,
    ) {
        if self.interactions.contains(Interactions::TAP) {
            self.taps
                .on_down(Some(pointer_id), segment, position, timestamp);
        }
    }

    /// Route pointer movement. Returns the new thumb center while dragging.
    pub fn pointer_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<f64> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        match self.drag_pointer {
            Some(drag) if drag.id == pointer_id => self.drag_to(position - drag.origin),
            _ => {
                if let Some(segment) = self.taps.on_move(Some(pointer_id), position) {
                    trace!("press on segment {segment} moved too far to stay a tap");
                }
                None
            }
        }
    }

    /// Route a pointer release. Returns the ticket of any commit it caused.
    pub fn pointer_up(
        &mut self,
        pointer_id: Option<PointerId>,
        position: Point,
        timestamp: u64,
    ) -> Option<AnimationTicket> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        if let Some(drag) = self.drag_pointer
            && drag.id == pointer_id
        {
            return self.end_drag();
        }
        let under = hit::segment_at(&self.layout, position, &self.hit_params);
        match self
            .taps
            .on_up(Some(pointer_id), under, position, timestamp)
        {
            TapResult::Tap(segment) => self.tap(segment),
            TapResult::Suppressed(pressed) => {
                if let Some(segment) = pressed {
                    trace!("press on segment {segment} was not a tap");
                }
                None
            }
        }
    }

    /// Route a canceled pointer. A drag still settles on the nearest segment.
    pub fn pointer_cancel(&mut self, pointer_id: Option<PointerId>) -> Option<AnimationTicket> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        if let Some(drag) = self.drag_pointer
            && drag.id == pointer_id
        {
            return self.cancel_drag();
        }
        self.taps.cancel(Some(pointer_id));
        None
    }
}
