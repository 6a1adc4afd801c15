use iced::time::Instant;

use crate::event::{SidebarEffect, SidebarIntent};
use crate::state::SidebarState;

/// Read-only context for sidebar reduction.
#[derive(Debug, Clone, Copy)]
pub struct SidebarCtx {
    pub now: Instant,
}

impl SidebarCtx {
    pub fn new(now: Instant) -> Self {
        Self { now }
    }

    /// Context stamped with the current time.
    pub fn now() -> Self {
        Self::new(Instant::now())
    }
}

/// Reduce a sidebar intent into state updates and an optional effect.
pub(crate) fn reduce(
    state: &mut SidebarState,
    intent: SidebarIntent,
    ctx: &SidebarCtx,
) -> Option<SidebarEffect> {
    state.advance_clock(ctx.now);

    match intent {
        SidebarIntent::Toggle => {
            state.toggle();
            log::debug!("sidebar toggled, opened={}", state.is_opened());
            None
        },
        SidebarIntent::SelectEntry { path } => {
            log::debug!("sidebar entry selected: {path}");
            state.set_active_route(path.clone());
            Some(SidebarEffect::Navigate { path })
        },
        SidebarIntent::EntryHovered { path } => {
            state.hover(path);
            None
        },
        SidebarIntent::EntryUnhovered { path } => {
            state.unhover(&path);
            None
        },
        SidebarIntent::AnimationFrame => None,
    }
}
