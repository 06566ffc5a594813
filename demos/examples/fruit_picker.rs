// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless fruit picker driven by simulated pointer events.
//!
//! This example shows how a host wires up `segmented_control`:
//! - a `ThumbPresenter` that "draws" by printing what it is asked to do,
//! - a closure listener held by the host and registered weakly,
//! - a queue standing in for the UI thread, on which finished animations are
//!   reported back to the control.
//!
//! Run:
//! - `cargo run -p segmented_control_demos --example fruit_picker`

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use segmented_control::{
    AnimationRequest, AnimationTicket, SegmentRegion, SegmentedControl, StyleConfig,
    ThumbPresenter,
};
use simplelog::{Config, LevelFilter, SimpleLogger};

/// Prints presenter calls and queues animation completions.
#[derive(Default)]
struct ConsolePresenter {
    center_x: f64,
    finished: VecDeque<AnimationTicket>,
}

impl ThumbPresenter for ConsolePresenter {
    fn thumb_center_x(&self) -> f64 {
        self.center_x
    }

    fn place_thumb(&mut self, frame: Rect) {
        self.center_x = frame.center().x;
        println!("  thumb at x = {:.1}", self.center_x);
    }

    fn set_thumb_title(&mut self, title: &str) {
        println!("  thumb reads {title:?}");
    }

    fn animate_thumb(&mut self, request: &AnimationRequest<'_>) {
        println!(
            "  animate thumb {:.1} -> {:.1} onto {:?} over {:?}",
            request.from_center_x, request.to_center_x, request.title, request.animation.duration
        );
        // Animations complete instantly here; a real host would wait for its timeline.
        self.center_x = request.to_center_x;
        self.finished.push_back(request.ticket);
    }

    fn layout_segments(&mut self, regions: &[SegmentRegion<'_>]) {
        for region in regions {
            println!("  segment {} {:?} at {:?}", region.index, region.title, region.rect);
        }
    }

    fn apply_style(&mut self, style: &StyleConfig) {
        println!("  style with corner radius {}", style.corner_radius);
    }
}

/// Report every finished animation, as the UI thread would on its next turn.
fn run_ui_turn(control: &mut SegmentedControl<ConsolePresenter>) {
    while let Some(ticket) = control.presenter_mut().finished.pop_front() {
        control.animation_finished(ticket);
    }
}

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).expect("Failed to initialize logger");

    println!("create");
    let mut control = SegmentedControl::new(
        Size::new(300.0, 40.0),
        ["Apple", "Banana", "Orange"],
        ConsolePresenter::default(),
    );

    let picked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&picked);
    let listener = Rc::new(move |index: usize| {
        println!("  listener: picked segment {index}");
        sink.borrow_mut().push(index);
    });
    control.set_listener(&listener);

    println!("drag the thumb from Apple toward Banana");
    control.pointer_down(None, Point::new(50.0, 20.0), 0);
    for x in [80.0, 130.0, 170.0] {
        control.pointer_move(None, Point::new(x, 22.0));
    }
    control.pointer_up(None, Point::new(170.0, 22.0), 250);
    println!("  before the UI turn, listener saw {:?}", picked.borrow());
    run_ui_turn(&mut control);

    println!("tap Orange");
    control.pointer_down(None, Point::new(260.0, 20.0), 1_000);
    control.pointer_up(None, Point::new(261.0, 20.0), 1_040);
    run_ui_turn(&mut control);

    println!("host moves the thumb back to Apple without notifying");
    control.move_to_item(0, false);
    run_ui_turn(&mut control);

    println!("titles change while a tap is animating");
    control.tap(2);
    control.set_titles(["Apple", "Banana"]);
    run_ui_turn(&mut control);

    println!("drop the listener and tap Banana");
    drop(listener);
    control.tap(1);
    run_ui_turn(&mut control);

    println!(
        "selected {:?}; listener saw {:?}",
        control.selected_title(),
        picked.borrow()
    );
}
