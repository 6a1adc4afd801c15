use iced::time::Instant;

use crate::manifest::NavigationManifest;
use crate::transition::Transition;

const CLOSED_REVEAL: f32 = 0.0;
const OPENED_REVEAL: f32 = 1.0;

/// Internal runtime state for the open/closed switch and the active route.
#[derive(Debug)]
pub(crate) struct SidebarState {
    opened: bool,
    active_route: String,
    hovered_route: Option<String>,
    reveal: Transition,
    clock: Instant,
}

impl SidebarState {
    pub(crate) fn new(manifest: &NavigationManifest, now: Instant) -> Self {
        Self {
            opened: false,
            active_route: String::from(manifest.default_path()),
            hovered_route: None,
            reveal: Transition::settled(CLOSED_REVEAL),
            clock: now,
        }
    }

    pub(crate) fn is_opened(&self) -> bool {
        self.opened
    }

    pub(crate) fn active_route(&self) -> &str {
        &self.active_route
    }

    pub(crate) fn hovered_route(&self) -> Option<&str> {
        self.hovered_route.as_deref()
    }

    /// Reveal progress at the last observed clock tick.
    pub(crate) fn reveal(&self) -> f32 {
        self.reveal.value(self.clock)
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.reveal.is_animating(self.clock)
    }

    pub(crate) fn advance_clock(&mut self, now: Instant) {
        if now > self.clock {
            self.clock = now;
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.opened = !self.opened;
        let target = if self.opened {
            OPENED_REVEAL
        } else {
            CLOSED_REVEAL
        };
        self.reveal.retarget(target, self.clock);
    }

    pub(crate) fn set_active_route(&mut self, path: String) {
        self.active_route = path;
    }

    pub(crate) fn hover(&mut self, path: String) {
        self.hovered_route = Some(path);
    }

    /// Clear the hover mark if it still belongs to `path`.
    pub(crate) fn unhover(&mut self, path: &str) {
        if self.hovered_route.as_deref() == Some(path) {
            self.hovered_route = None;
        }
    }
}
