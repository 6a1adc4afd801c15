use serde::Deserialize;
use technifly_ui_sidebar::ColorMode;

/// Environment variable overriding the configured color mode.
pub(crate) const COLOR_ENV_VAR: &str = "TECHNIFLY_COLOR";

/// Typed settings payload read from `settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    sidebar: SidebarSettings,
}

/// Sidebar-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct SidebarSettings {
    color: String,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            color: String::from(ColorMode::default().name()),
        }
    }
}

impl Settings {
    /// Raw configured color name, as written by the user.
    pub(crate) fn color(&self) -> &str {
        &self.sidebar.color
    }

    /// Resolved color mode; unknown names fall back to light.
    pub(crate) fn color_mode(&self) -> ColorMode {
        ColorMode::from_name(&self.sidebar.color)
    }

    /// Apply an environment override for the color, ignoring blank values.
    pub(crate) fn with_color_override(mut self, color: Option<String>) -> Self {
        if let Some(color) = color.filter(|value| !value.trim().is_empty()) {
            self.sidebar.color = color.trim().to_string();
        }
        self
    }
}
