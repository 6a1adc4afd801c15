/// Path used as the initial active route when a manifest has no entries.
pub const FALLBACK_PATH: &str = "/";

/// Symbolic icon identifiers rendered by a [`SidebarAssets`] provider.
///
/// [`SidebarAssets`]: crate::SidebarAssets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    House,
    ChartLine,
    ChartColumn,
    Wallet,
    ChartPie,
    Envelope,
    Sliders,
    PhoneVolume,
    /// Toggle glyph shown while the sidebar is opened.
    AngleLeft,
    /// Toggle glyph shown while the sidebar is closed.
    AngleRight,
}

impl Icon {
    /// Stable symbolic name of the icon.
    pub fn name(self) -> &'static str {
        match self {
            Icon::House => "house",
            Icon::ChartLine => "chart-line",
            Icon::ChartColumn => "chart-column",
            Icon::Wallet => "wallet",
            Icon::ChartPie => "chart-pie",
            Icon::Envelope => "envelope",
            Icon::Sliders => "sliders",
            Icon::PhoneVolume => "phone-volume",
            Icon::AngleLeft => "angle-left",
            Icon::AngleRight => "angle-right",
        }
    }
}

/// A single navigation target shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub title: &'static str,
    pub icon: Icon,
    pub path: &'static str,
}

impl NavigationEntry {
    pub const fn new(
        title: &'static str,
        icon: Icon,
        path: &'static str,
    ) -> Self {
        Self { title, icon, path }
    }
}

pub const PRIMARY_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry::new("Home", Icon::House, "/"),
    NavigationEntry::new("Sales", Icon::ChartLine, "/sales"),
    NavigationEntry::new("Costs", Icon::ChartColumn, "/costs"),
    NavigationEntry::new("Payments", Icon::Wallet, "/payments"),
    NavigationEntry::new("Finances", Icon::ChartPie, "/finances"),
    NavigationEntry::new("Messages", Icon::Envelope, "/messages"),
];

pub const SECONDARY_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry::new("Settings", Icon::Sliders, "/settings"),
    NavigationEntry::new("Support", Icon::PhoneVolume, "/support"),
];

/// Immutable pair of ordered entry groups: the primary list and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationManifest {
    primary: &'static [NavigationEntry],
    secondary: &'static [NavigationEntry],
}

impl NavigationManifest {
    pub const fn new(
        primary: &'static [NavigationEntry],
        secondary: &'static [NavigationEntry],
    ) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &'static [NavigationEntry] {
        self.primary
    }

    /// Footer entries, rendered at the bottom edge of the panel.
    pub fn secondary(&self) -> &'static [NavigationEntry] {
        self.secondary
    }

    /// Iterate over primary entries followed by footer entries.
    pub fn entries(&self) -> impl Iterator<Item = &'static NavigationEntry> {
        self.primary.iter().chain(self.secondary.iter())
    }

    /// Look up an entry in either group by its path.
    pub fn find(&self, path: &str) -> Option<&'static NavigationEntry> {
        self.entries().find(|entry| entry.path == path)
    }

    /// Path of the first primary entry, or [`FALLBACK_PATH`] when empty.
    pub fn default_path(&self) -> &'static str {
        self.primary
            .first()
            .map(|entry| entry.path)
            .unwrap_or(FALLBACK_PATH)
    }
}

impl Default for NavigationManifest {
    fn default() -> Self {
        NavigationManifest::new(PRIMARY_ENTRIES, SECONDARY_ENTRIES)
    }
}
