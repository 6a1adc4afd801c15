use iced::{Subscription, window};
use technifly_ui_sidebar::{SidebarEvent, SidebarIntent};

use super::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    // Frames are only needed while the open/close transition runs.
    if app.sidebar.is_animating() {
        window::frames().map(|_| {
            AppEvent::Sidebar(SidebarEvent::Intent(
                SidebarIntent::AnimationFrame,
            ))
        })
    } else {
        Subscription::none()
    }
}
