use std::fmt;

use iced::theme::Palette as IcedPalette;
use iced::{Color, Theme};

/// Color mode requested by the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Resolve a color mode by name.
    ///
    /// Only the exact names `"light"` and `"dark"` are recognised. Every
    /// other value resolves to [`ColorMode::Light`] without failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => ColorMode::Light,
            "dark" => ColorMode::Dark,
            other => {
                log::debug!("unknown color mode {other:?}, using light");
                ColorMode::Light
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Return the immutable palette for this mode.
    pub fn palette(self) -> &'static Palette {
        match self {
            ColorMode::Light => &LIGHT,
            ColorMode::Dark => &DARK,
        }
    }
}

impl From<&str> for ColorMode {
    fn from(value: &str) -> Self {
        ColorMode::from_name(value)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve the palette for a raw color name, falling back to [`LIGHT`].
pub fn resolve(color: &str) -> &'static Palette {
    ColorMode::from_name(color).palette()
}

/// Named color tokens consumed by the sidebar render functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub sidebar_background: Color,
    pub sidebar_hover: Color,
    pub sidebar_active: Color,
    pub text_logo_default: Color,
    pub text_default: Color,
    pub text_hover: Color,
    pub text_active: Color,
    pub toggle_button_default: Color,
    pub toggle_button_active: Color,
    pub border_container: Color,
}

pub const LIGHT: Palette = Palette {
    sidebar_background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
    sidebar_hover: Color::from_rgb8(0xF3, 0xF6, 0xF9),
    sidebar_active: Color::from_rgb8(0xE6, 0xEE, 0xFD),
    text_logo_default: Color::from_rgb8(0x1B, 0x2B, 0x41),
    text_default: Color::from_rgb8(0x7C, 0x8D, 0xB5),
    text_hover: Color::from_rgb8(0x4A, 0x5A, 0x7D),
    text_active: Color::from_rgb8(0x2F, 0x6F, 0xED),
    toggle_button_default: Color::from_rgb8(0xED, 0xF2, 0xF6),
    toggle_button_active: Color::from_rgb8(0xC9, 0xDA, 0xFB),
    border_container: Color::from_rgb8(0xED, 0xF2, 0xF6),
};

pub const DARK: Palette = Palette {
    sidebar_background: Color::from_rgb8(0x1D, 0x21, 0x27),
    sidebar_hover: Color::from_rgb8(0x2A, 0x30, 0x38),
    sidebar_active: Color::from_rgb8(0x32, 0x3A, 0x45),
    text_logo_default: Color::from_rgb8(0xFF, 0xFF, 0xFF),
    text_default: Color::from_rgb8(0x8A, 0x94, 0xA6),
    text_hover: Color::from_rgb8(0xC9, 0xD1, 0xDD),
    text_active: Color::from_rgb8(0xFF, 0xFF, 0xFF),
    toggle_button_default: Color::from_rgb8(0x2A, 0x30, 0x38),
    toggle_button_active: Color::from_rgb8(0x4B, 0x7B, 0xEC),
    border_container: Color::from_rgb8(0x31, 0x37, 0x40),
};

impl From<&Palette> for Theme {
    fn from(value: &Palette) -> Self {
        let palette = IcedPalette {
            background: value.sidebar_background,
            text: value.text_default,
            primary: value.text_active,
            success: value.text_active,
            danger: value.text_hover,
            warning: value.text_hover,
        };

        Theme::custom(String::from("technifly"), palette)
    }
}

/// Theme props passed explicitly from the app down to render functions.
#[derive(Debug, Clone, Copy)]
pub struct ThemeProps<'a> {
    pub palette: &'a Palette,
}

impl<'a> ThemeProps<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl From<ColorMode> for ThemeProps<'static> {
    fn from(value: ColorMode) -> Self {
        ThemeProps::new(value.palette())
    }
}
