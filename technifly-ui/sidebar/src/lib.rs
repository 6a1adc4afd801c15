//! Collapsible, themable side navigation for the Technifly dashboard.
//!
//! The crate is split into three layers:
//! - the theme resolver ([`ColorMode`], [`Palette`], [`resolve`]) mapping a
//!   color-mode flag to one of two immutable palettes;
//! - the widget state machine ([`SidebarWidget`]) reduced from
//!   [`SidebarIntent`] values, emitting [`SidebarEffect::Navigate`] for the
//!   host router;
//! - a pure render contract ([`render`] producing a [`SidebarView`]) and a
//!   thin `iced` adapter ([`view`]) that turns the tree into widgets.
//!
//! The palette is always passed explicitly through [`ThemeProps`]; nothing
//! in this crate reads an ambient theme.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::svg;
//! use technifly_ui_sidebar::{
//!     ColorMode, Icon, SidebarAssets, SidebarCtx, SidebarEffect,
//!     SidebarEvent, SidebarIntent, SidebarWidget,
//! };
//!
//! struct Assets;
//!
//! impl SidebarAssets for Assets {
//!     fn icon(&self, icon: Icon) -> svg::Handle {
//!         svg::Handle::from_path(format!("icons/{}.svg", icon.name()))
//!     }
//!
//!     fn logo(&self) -> svg::Handle {
//!         svg::Handle::from_path("logo.svg")
//!     }
//! }
//!
//! let mut sidebar = SidebarWidget::new(ColorMode::from_name("dark"));
//! let _task = sidebar.reduce(SidebarIntent::Toggle, &SidebarCtx::now());
//! let _element = sidebar.view(&Assets);
//! ```

mod event;
mod manifest;
mod model;
mod reducer;
mod state;
mod theme;
mod transition;
mod view;
mod widget;

pub use event::{SidebarEffect, SidebarEvent, SidebarIntent};
pub use manifest::{
    FALLBACK_PATH, Icon, NavigationEntry, NavigationManifest, PRIMARY_ENTRIES,
    SECONDARY_ENTRIES,
};
pub use model::{
    EntryTone, EntryView, HeaderView, LabelView, SIDEBAR_CLOSED_WIDTH,
    SIDEBAR_OPENED_WIDTH, SidebarSnapshot, SidebarView, ToggleView,
    entry_tone, render,
};
pub use reducer::SidebarCtx;
pub use theme::{ColorMode, DARK, LIGHT, Palette, ThemeProps, resolve};
pub use transition::{TRANSITION_DURATION, Transition};
pub use view::{SidebarAssets, view};
pub use widget::SidebarWidget;
