/// Intent events emitted by the sidebar view and reduced by the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarIntent {
    /// Toggle control pressed.
    Toggle,
    /// Navigation entry pressed, primary or footer.
    SelectEntry { path: String },
    EntryHovered { path: String },
    EntryUnhovered { path: String },
    /// Redraw tick while the open/close transition runs.
    AnimationFrame,
}

/// Effect events produced by the sidebar reducer for the host to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarEffect {
    /// The user asked to navigate to `path`.
    Navigate { path: String },
}

/// Sidebar event stream routed through the host update loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect handled by the hosting application.
    Effect(SidebarEffect),
}
