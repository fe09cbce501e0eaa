//! Host-side driver for a single control instance.

use std::rc::Rc;

use crate::control::{OutputNotifier, StandardControl};
use crate::dom::{Element, ElementRef};
use crate::host::Context;

/// Lifecycle phase of a [`Session`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Created,
    Mounted,
    Destroyed,
}

/// Owns one control and the container the host gave it, and sequences the
/// lifecycle calls the way the host does.
///
/// Calls made in the wrong phase are ignored and logged.
pub struct Session<C: StandardControl> {
    control: C,
    container: ElementRef,
    phase: Phase,
}

impl<C: StandardControl> Session<C> {
    /// Wraps `control` with a fresh, empty `div` container.
    pub fn new(control: C) -> Self {
        Self { control, container: Element::create("div"), phase: Phase::Created }
    }

    /// Runs `init` with a no-op output notifier.
    pub fn mount(&mut self, context: &mut Context) {
        self.mount_with(context, Box::new(|| {}));
    }

    pub fn mount_with(&mut self, context: &mut Context, notify_output_changed: OutputNotifier) {
        if self.phase != Phase::Created {
            log::warn!("session: mount ignored in phase {:?}", self.phase);
            return;
        }
        self.control.init(context, notify_output_changed, &self.container);
        self.phase = Phase::Mounted;
    }

    pub fn update(&mut self, context: &Context) {
        if self.phase != Phase::Mounted {
            log::warn!("session: update ignored in phase {:?}", self.phase);
            return;
        }
        self.control.update_view(context);
    }

    pub fn outputs(&mut self) -> Option<C::Outputs> {
        (self.phase == Phase::Mounted).then(|| self.control.outputs())
    }

    /// Runs `destroy` and detaches everything the control rendered.
    pub fn unmount(&mut self) {
        if self.phase != Phase::Mounted {
            log::warn!("session: unmount ignored in phase {:?}", self.phase);
            return;
        }
        self.control.destroy();
        self.container.borrow_mut().set_inner_markup("");
        self.phase = Phase::Destroyed;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn container(&self) -> ElementRef {
        Rc::clone(&self.container)
    }

    /// Serialized content of the host container.
    pub fn markup(&self) -> String {
        self.container.borrow().inner_markup()
    }
}
