#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};
use technifly_ui_sidebar::{ColorMode, SidebarEvent, SidebarWidget};

use crate::assets::BundledAssets;
use crate::navigation::Navigator;
use crate::settings::Settings;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Routing
    Navigate(String),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) color: ColorMode,
    pub(crate) assets: BundledAssets,
    pub(crate) navigator: Navigator,
    pub(crate) sidebar: SidebarWidget,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = Settings::load();
        (Self::with_color(settings.color_mode()), Task::none())
    }

    /// Mount the application with a fixed color mode.
    pub(crate) fn with_color(color: ColorMode) -> Self {
        let sidebar = SidebarWidget::new(color);
        let navigator =
            Navigator::new(*sidebar.manifest(), sidebar.active_route());
        log::info!("mounting dashboard with {color} palette");

        App {
            color,
            assets: BundledAssets::new(),
            navigator,
            sidebar,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match self.navigator.current_title() {
            Some(title) => format!("Technifly - {title}"),
            None => String::from("Technifly"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(self.color.palette())
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
