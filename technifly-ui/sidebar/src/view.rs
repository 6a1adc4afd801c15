use iced::widget::{
    Column, Space, column, container, mouse_area, row, stack, svg, text,
};
use iced::{
    Alignment, Border, Color, Element, Font, Length, Padding, Theme,
    alignment, font, mouse,
};

use crate::event::SidebarIntent;
use crate::manifest::Icon;
use crate::model::{
    ENTRY_GAP, ENTRY_ICON_SIZE, ENTRY_PADDING, ENTRY_RADIUS, EntryView,
    HEADER_MARGIN, HeaderView, LABEL_SPACING, LOGO_SIZE, LOGO_SPACING,
    SIDEBAR_BORDER_RADIUS, SIDEBAR_BORDER_WIDTH, SIDEBAR_PADDING, SidebarView,
    TITLE_SIZE, TOGGLE_PADDING, TOGGLE_SIZE, ToggleView,
};

/// Icon-rendering capability and logo asset supplied by the host.
pub trait SidebarAssets {
    /// Glyph for a symbolic icon identifier.
    fn icon(&self, icon: Icon) -> svg::Handle;
    /// Logo shown in the sidebar header.
    fn logo(&self) -> svg::Handle;
}

/// Translate a rendered sidebar tree into `iced` widgets.
///
/// The toggle control floats over the panel's right edge, so the returned
/// element is half a toggle wider than [`SidebarView::outer_width`].
pub fn view<'a>(
    sidebar: SidebarView,
    assets: &dyn SidebarAssets,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let outer_width = sidebar.outer_width();
    let background = sidebar.background;
    let text_color = sidebar.text_color;
    let border_color = sidebar.border_color;

    let primary = Column::with_children(
        sidebar
            .primary
            .into_iter()
            .map(|entry| entry_button(entry, assets)),
    )
    .spacing(ENTRY_GAP)
    .width(Length::Fill);

    let footer = Column::with_children(
        sidebar
            .secondary
            .into_iter()
            .map(|entry| entry_button(entry, assets)),
    )
    .spacing(ENTRY_GAP)
    .width(Length::Fill);

    let content = column![
        header(sidebar.header, assets),
        primary,
        Space::new().height(Length::Fill),
        footer,
    ]
    .width(Length::Fixed(sidebar.width))
    .height(Length::Fill);

    let panel = container(content)
        .padding(SIDEBAR_PADDING)
        .width(Length::Fixed(outer_width))
        .height(Length::Fill)
        .clip(true)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(text_color),
            border: Border {
                width: SIDEBAR_BORDER_WIDTH,
                color: border_color,
                radius: SIDEBAR_BORDER_RADIUS.into(),
            },
            ..Default::default()
        });

    let base = row![panel, Space::new().width(Length::Fixed(TOGGLE_SIZE / 2.0))]
        .height(Length::Fill);

    let toggle_top = SIDEBAR_BORDER_WIDTH
        + SIDEBAR_PADDING
        + HEADER_MARGIN
        + (LOGO_SIZE - TOGGLE_SIZE) / 2.0;
    let toggle_layer = container(toggle_button(sidebar.toggle, assets))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(Padding {
            top: toggle_top,
            ..Padding::ZERO
        });

    stack![base, toggle_layer].height(Length::Fill).into()
}

fn header<'a>(
    header: HeaderView,
    assets: &dyn SidebarAssets,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let logo = svg(assets.logo())
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE));

    let mut content = row![logo]
        .spacing(LOGO_SPACING)
        .align_y(Alignment::Center);

    if header.title_visible {
        let title = text(header.title)
            .size(TITLE_SIZE)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(header.title_color)
            .wrapping(text::Wrapping::None);
        content = content.push(title);
    }

    container(content)
        .padding(Padding {
            top: HEADER_MARGIN,
            bottom: HEADER_MARGIN,
            ..Padding::ZERO
        })
        .into()
}

fn toggle_button<'a>(
    toggle: ToggleView,
    assets: &dyn SidebarAssets,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let glyph_color = toggle.glyph_color;
    let background = toggle.background;

    let glyph = svg(assets.icon(toggle.glyph))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_, _| svg::Style {
            color: Some(glyph_color),
        });

    let body = container(glyph)
        .padding(TOGGLE_PADDING)
        .width(Length::Fixed(TOGGLE_SIZE))
        .height(Length::Fixed(TOGGLE_SIZE))
        .style(move |_| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: (TOGGLE_SIZE / 2.0).into(),
                ..Border::default()
            },
            ..Default::default()
        });

    mouse_area(body)
        .on_press(SidebarIntent::Toggle)
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn entry_button<'a>(
    entry: EntryView,
    assets: &dyn SidebarAssets,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let text_color = entry.text_color;
    let icon_color = entry.icon_color;
    let background = entry.background;
    let path = String::from(entry.path);

    let icon = svg(assets.icon(entry.icon))
        .width(Length::Fixed(ENTRY_ICON_SIZE))
        .height(Length::Fixed(ENTRY_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(icon_color),
        });

    let mut content = row![icon].align_y(Alignment::Center);

    if entry.label.in_layout {
        let label_color = Color {
            a: text_color.a * entry.label.opacity,
            ..text_color
        };
        let label = text(entry.title)
            .color(label_color)
            .wrapping(text::Wrapping::None);
        let indent = (LABEL_SPACING + entry.label.offset_x).max(0.0);
        content = content.push(container(label).padding(Padding {
            left: indent,
            ..Padding::ZERO
        }));
    }

    let body = container(content)
        .padding(ENTRY_PADDING)
        .width(Length::Fill)
        .clip(true)
        .style(move |_| container::Style {
            background: background.map(Into::into),
            border: Border {
                radius: ENTRY_RADIUS.into(),
                ..Border::default()
            },
            ..Default::default()
        });

    mouse_area(body)
        .on_press(SidebarIntent::SelectEntry { path: path.clone() })
        .on_enter(SidebarIntent::EntryHovered { path: path.clone() })
        .on_exit(SidebarIntent::EntryUnhovered { path })
        .interaction(mouse::Interaction::Pointer)
        .into()
}
