// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection listener registration.

use alloc::rc::{Rc, Weak};

/// Receives selection changes from a control.
///
/// Calls happen on the thread driving the control, after the thumb animation
/// for the selection has finished.
pub trait SelectionListener {
    /// The segment at `index` was selected.
    fn item_selected(&self, index: usize);
}

impl<F: Fn(usize)> SelectionListener for F {
    fn item_selected(&self, index: usize) {
        self(index);
    }
}

/// Non-owning slot for at most one listener.
#[derive(Clone, Debug, Default)]
pub(crate) struct ListenerSlot {
    listener: Option<Weak<dyn SelectionListener>>,
}

impl ListenerSlot {
    pub(crate) fn set<L: SelectionListener + 'static>(&mut self, listener: &Rc<L>) {
        let weak: Weak<dyn SelectionListener> = Rc::<L>::downgrade(listener);
        self.listener = Some(weak);
    }

    pub(crate) fn clear(&mut self) {
        self.listener = None;
    }

    /// Returns `true` if a listener is registered and still alive.
    pub(crate) fn is_attached(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Deliver `index` to the listener. Returns `false` if nobody received it.
    pub(crate) fn notify(&self, index: usize) -> bool {
        let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) else {
            return false;
        };
        listener.item_selected(index);
        true
    }
}
