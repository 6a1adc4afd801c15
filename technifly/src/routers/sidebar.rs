use iced::Task;
use technifly_ui_sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

use crate::app::{App, AppEvent};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(intent) => route_intent(app, intent),
        SidebarEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: SidebarIntent) -> Task<AppEvent> {
    app.sidebar
        .reduce(intent, &SidebarCtx::now())
        .map(AppEvent::Sidebar)
}

fn route_effect(effect: SidebarEffect) -> Task<AppEvent> {
    use SidebarEffect as E;

    match effect {
        E::Navigate { path } => Task::done(AppEvent::Navigate(path)),
    }
}
