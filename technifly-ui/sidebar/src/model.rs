//! Framework-independent render contract of the sidebar.
//!
//! [`render`] is a pure function of the palette, the manifest and a state
//! snapshot. The `iced` adapter in [`crate::view`] only translates the
//! resulting [`SidebarView`] into widgets.

use iced::Color;

use crate::manifest::{Icon, NavigationEntry, NavigationManifest};
use crate::theme::{Palette, ThemeProps};

/// Content width of the opened panel.
pub const SIDEBAR_OPENED_WIDTH: f32 = 240.0;
/// Content width of the compact, icon-only panel.
pub const SIDEBAR_CLOSED_WIDTH: f32 = 55.0;

pub const SIDEBAR_BORDER_WIDTH: f32 = 4.0;
pub const SIDEBAR_BORDER_RADIUS: f32 = 12.0;
pub const SIDEBAR_PADDING: f32 = 15.0;

pub const HEADER_MARGIN: f32 = 30.0;
pub const LOGO_SIZE: f32 = 50.0;
pub const LOGO_SPACING: f32 = 20.0;
pub const TITLE: &str = "Technifly";
pub const TITLE_SIZE: f32 = 24.0;

pub const TOGGLE_SIZE: f32 = 25.0;
pub const TOGGLE_PADDING: f32 = 4.0;

pub const ENTRY_GAP: f32 = 20.0;
pub const ENTRY_PADDING: f32 = 15.0;
pub const ENTRY_RADIUS: f32 = 13.0;
pub const ENTRY_ICON_SIZE: f32 = 20.0;
pub const LABEL_SPACING: f32 = 20.0;
/// Horizontal distance a hidden label is shifted out of view.
pub const LABEL_SHIFT: f32 = 20.0;

/// Read-only snapshot of widget state consumed by [`render`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarSnapshot<'a> {
    pub is_opened: bool,
    pub active_route: &'a str,
    pub hovered_route: Option<&'a str>,
    /// Transition progress, `0.0` fully closed and `1.0` fully opened.
    pub reveal: f32,
}

/// Rendered sidebar tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView {
    /// Content width, interpolated between the closed and opened widths.
    pub width: f32,
    pub background: Color,
    pub text_color: Color,
    pub border_color: Color,
    pub header: HeaderView,
    pub toggle: ToggleView,
    pub primary: Vec<EntryView>,
    /// Footer entries, pinned to the bottom edge of the panel.
    pub secondary: Vec<EntryView>,
}

impl SidebarView {
    /// Width including padding and border on both sides.
    pub fn outer_width(&self) -> f32 {
        self.width + 2.0 * (SIDEBAR_PADDING + SIDEBAR_BORDER_WIDTH)
    }

    pub fn entries(&self) -> impl Iterator<Item = &EntryView> {
        self.primary.iter().chain(self.secondary.iter())
    }

    pub fn active_entries(&self) -> impl Iterator<Item = &EntryView> {
        self.entries().filter(|entry| entry.tone == EntryTone::Active)
    }

    pub fn entry(&self, path: &str) -> Option<&EntryView> {
        self.entries().find(|entry| entry.path == path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub title: &'static str,
    /// The title is dropped from layout while the sidebar is closed.
    pub title_visible: bool,
    pub title_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleView {
    pub background: Color,
    pub glyph: Icon,
    pub glyph_color: Color,
}

/// Visual tone of a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTone {
    Default,
    Hovered,
    Active,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub title: &'static str,
    pub icon: Icon,
    pub path: &'static str,
    pub tone: EntryTone,
    /// `None` renders a transparent background.
    pub background: Option<Color>,
    /// Label color, follows the tone.
    pub text_color: Color,
    /// Icon color, always the panel's default text color.
    pub icon_color: Color,
    pub label: LabelView,
}

impl EntryView {
    pub fn is_active(&self) -> bool {
        self.tone == EntryTone::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelView {
    pub opacity: f32,
    /// Offset from the resting position, negative values shift left.
    pub offset_x: f32,
    /// Whether the label takes part in layout at all.
    pub in_layout: bool,
}

/// Render the sidebar tree for the given palette, manifest and state.
pub fn render(
    theme: ThemeProps<'_>,
    manifest: &NavigationManifest,
    snapshot: &SidebarSnapshot<'_>,
) -> SidebarView {
    let palette = theme.palette;
    let reveal = snapshot.reveal.clamp(0.0, 1.0);
    let label = label_view(reveal);

    let render_group = |entries: &'static [NavigationEntry]| {
        entries
            .iter()
            .map(|entry| entry_view(palette, entry, snapshot, label))
            .collect::<Vec<_>>()
    };

    SidebarView {
        width: lerp(SIDEBAR_CLOSED_WIDTH, SIDEBAR_OPENED_WIDTH, reveal),
        background: palette.sidebar_background,
        text_color: palette.text_default,
        border_color: palette.border_container,
        header: HeaderView {
            title: TITLE,
            title_visible: snapshot.is_opened,
            title_color: palette.text_logo_default,
        },
        toggle: toggle_view(palette, snapshot.is_opened),
        primary: render_group(manifest.primary()),
        secondary: render_group(manifest.secondary()),
    }
}

/// Resolve an entry tone. Active takes precedence over hover.
pub fn entry_tone(
    entry: &NavigationEntry,
    snapshot: &SidebarSnapshot<'_>,
) -> EntryTone {
    if entry.path == snapshot.active_route {
        EntryTone::Active
    } else if snapshot.hovered_route == Some(entry.path) {
        EntryTone::Hovered
    } else {
        EntryTone::Default
    }
}

fn entry_view(
    palette: &Palette,
    entry: &NavigationEntry,
    snapshot: &SidebarSnapshot<'_>,
    label: LabelView,
) -> EntryView {
    let tone = entry_tone(entry, snapshot);
    let (background, text_color) = match tone {
        EntryTone::Active => {
            (Some(palette.sidebar_active), palette.text_active)
        },
        EntryTone::Hovered => (Some(palette.sidebar_hover), palette.text_hover),
        EntryTone::Default => (None, palette.text_default),
    };

    EntryView {
        title: entry.title,
        icon: entry.icon,
        path: entry.path,
        tone,
        background,
        text_color,
        icon_color: palette.text_default,
        label,
    }
}

fn toggle_view(palette: &Palette, is_opened: bool) -> ToggleView {
    if is_opened {
        ToggleView {
            background: palette.toggle_button_active,
            glyph: Icon::AngleLeft,
            glyph_color: palette.text_active,
        }
    } else {
        ToggleView {
            background: palette.toggle_button_default,
            glyph: Icon::AngleRight,
            glyph_color: palette.text_default,
        }
    }
}

fn label_view(reveal: f32) -> LabelView {
    LabelView {
        opacity: reveal,
        offset_x: -(1.0 - reveal) * LABEL_SHIFT,
        in_layout: reveal > 0.0,
    }
}

fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
