use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme};
use technifly_ui_sidebar::{SidebarEvent, ThemeProps};

use super::{App, AppEvent};

const LAYOUT_PADDING: f32 = 16.0;
const PAGE_PADDING: f32 = 32.0;
const PAGE_TITLE_SIZE: f32 = 28.0;
const PAGE_PATH_SIZE: f32 = 14.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = ThemeProps::from(app.color);

    let sidebar = app
        .sidebar
        .view(&app.assets)
        .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)));

    row![sidebar, page(app, theme)]
        .spacing(LAYOUT_PADDING)
        .padding(LAYOUT_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Placeholder content area showing the current location.
fn page<'a>(
    app: &'a App,
    theme: ThemeProps<'static>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme.palette;
    let title = app.navigator.current_title().unwrap_or("Technifly");

    let content = column![
        text(title)
            .size(PAGE_TITLE_SIZE)
            .color(palette.text_logo_default),
        text(app.navigator.location())
            .size(PAGE_PATH_SIZE)
            .color(palette.text_default),
    ]
    .spacing(8);

    container(content)
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
