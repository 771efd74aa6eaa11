// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A widget that records what it receives, for dispatch tests.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use tessera_element_tree::{EventCx, Geometry, Painter, Widget};
use tessera_event_state::semantic::{KeyboardEvent, KeyboardKind, MouseEvent, MouseKind};

type Entries<T> = Rc<RefCell<Vec<(&'static str, T)>>>;

#[derive(Clone, Debug, Default)]
pub(crate) struct Log {
    mouse: Entries<MouseKind>,
    keys: Entries<KeyboardKind>,
}

impl Log {
    pub(crate) fn take(&self) -> Vec<(&'static str, MouseKind)> {
        core::mem::take(&mut *self.mouse.borrow_mut())
    }

    pub(crate) fn take_keys(&self) -> Vec<(&'static str, KeyboardKind)> {
        core::mem::take(&mut *self.keys.borrow_mut())
    }

    pub(crate) fn clear(&self) {
        self.mouse.borrow_mut().clear();
        self.keys.borrow_mut().clear();
    }
}

#[derive(Debug)]
pub(crate) struct Probe {
    name: &'static str,
    log: Log,
    handles: bool,
}

impl Probe {
    pub(crate) fn new(name: &'static str, log: &Log, handles: bool) -> Self {
        Self {
            name,
            log: log.clone(),
            handles,
        }
    }
}

impl Widget for Probe {
    fn handle_mouse(&mut self, event: &MouseEvent, _: &Geometry, _: &mut EventCx) -> bool {
        self.log.mouse.borrow_mut().push((self.name, event.kind));
        self.handles
    }

    fn handle_keyboard(&mut self, event: &KeyboardEvent, _: &mut EventCx) -> bool {
        self.log.keys.borrow_mut().push((self.name, event.kind));
        self.handles
    }

    fn draw(&self, _: &mut dyn Painter, _: &Geometry) {}
}
