use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Navigate(path) => {
            app.navigator.navigate(path);
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use technifly_ui_sidebar::{
        ColorMode, SidebarEffect, SidebarEvent, SidebarIntent,
    };

    use super::update;
    use crate::app::{App, AppEvent};

    #[test]
    fn given_select_intent_when_updated_then_sidebar_highlight_changes() {
        let mut app = App::with_color(ColorMode::Dark);

        let _task = update(
            &mut app,
            AppEvent::Sidebar(SidebarEvent::Intent(
                SidebarIntent::SelectEntry {
                    path: String::from("/sales"),
                },
            )),
        );

        assert_eq!(app.sidebar.active_route(), "/sales");
    }

    #[test]
    fn given_navigate_effect_when_updated_then_navigator_location_changes() {
        let mut app = App::with_color(ColorMode::Light);

        let _task = update(
            &mut app,
            AppEvent::Sidebar(SidebarEvent::Effect(SidebarEffect::Navigate {
                path: String::from("/support"),
            })),
        );
        let _task =
            update(&mut app, AppEvent::Navigate(String::from("/support")));

        assert_eq!(app.navigator.location(), "/support");
        assert_eq!(app.title(), "Technifly - Support");
    }

    #[test]
    fn given_toggle_intent_when_updated_then_route_is_not_navigated() {
        let mut app = App::with_color(ColorMode::Light);

        let _task = update(
            &mut app,
            AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::Toggle)),
        );

        assert!(app.sidebar.is_opened());
        assert_eq!(app.navigator.location(), "/");
        assert_eq!(app.navigator.current_title(), Some("Home"));
    }
}
