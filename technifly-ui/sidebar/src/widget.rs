use iced::time::Instant;
use iced::{Element, Task, Theme};

use crate::event::{SidebarEvent, SidebarIntent};
use crate::manifest::NavigationManifest;
use crate::model::{SidebarSnapshot, SidebarView, render};
use crate::reducer::{self, SidebarCtx};
use crate::state::SidebarState;
use crate::theme::{ColorMode, Palette, ThemeProps};
use crate::view::{self, SidebarAssets};

/// Sidebar widget owning its private state.
///
/// The color mode is fixed for the lifetime of the widget; remount the
/// widget to switch palettes.
pub struct SidebarWidget {
    color: ColorMode,
    manifest: NavigationManifest,
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct a closed sidebar over the default manifest.
    pub fn new(color: ColorMode) -> Self {
        Self::with_manifest(color, NavigationManifest::default())
    }

    pub fn with_manifest(
        color: ColorMode,
        manifest: NavigationManifest,
    ) -> Self {
        log::debug!("sidebar mounted with {color} palette");
        Self {
            color,
            manifest,
            state: SidebarState::new(&manifest, Instant::now()),
        }
    }

    /// Reduce an intent into state updates and effect events.
    pub fn reduce(
        &mut self,
        intent: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        match reducer::reduce(&mut self.state, intent, ctx) {
            Some(effect) => Task::done(SidebarEvent::Effect(effect)),
            None => Task::none(),
        }
    }

    pub fn color(&self) -> ColorMode {
        self.color
    }

    pub fn palette(&self) -> &'static Palette {
        self.color.palette()
    }

    pub fn manifest(&self) -> &NavigationManifest {
        &self.manifest
    }

    pub fn is_opened(&self) -> bool {
        self.state.is_opened()
    }

    pub fn active_route(&self) -> &str {
        self.state.active_route()
    }

    pub fn hovered_route(&self) -> Option<&str> {
        self.state.hovered_route()
    }

    /// Return whether the open/close transition still needs frames.
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Build a read-only snapshot for the render contract.
    pub fn snapshot(&self) -> SidebarSnapshot<'_> {
        SidebarSnapshot {
            is_opened: self.state.is_opened(),
            active_route: self.state.active_route(),
            hovered_route: self.state.hovered_route(),
            reveal: self.state.reveal(),
        }
    }

    /// Render the framework-independent sidebar tree.
    pub fn render(&self) -> SidebarView {
        render(
            ThemeProps::new(self.palette()),
            &self.manifest,
            &self.snapshot(),
        )
    }

    /// Render the sidebar as an `iced` element.
    pub fn view<'a>(
        &self,
        assets: &dyn SidebarAssets,
    ) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
        view::view(self.render(), assets)
    }
}

#[cfg(test)]
mod tests {
    use iced::time::Instant;

    use super::SidebarWidget;
    use crate::event::SidebarIntent;
    use crate::model::EntryTone;
    use crate::reducer::SidebarCtx;
    use crate::theme::{ColorMode, DARK};
    use crate::transition::TRANSITION_DURATION;

    fn select(path: &str) -> SidebarIntent {
        SidebarIntent::SelectEntry {
            path: String::from(path),
        }
    }

    /// Reduce at `clock`, then advance it until the transition settles.
    fn reduce_settled(
        widget: &mut SidebarWidget,
        clock: &mut Instant,
        intent: SidebarIntent,
    ) {
        let _task = widget.reduce(intent, &SidebarCtx::new(*clock));
        *clock += TRANSITION_DURATION;
        let _task = widget
            .reduce(SidebarIntent::AnimationFrame, &SidebarCtx::new(*clock));
    }

    #[test]
    fn given_new_widget_then_initial_state_is_closed_on_root() {
        let widget = SidebarWidget::new(ColorMode::Light);

        assert!(!widget.is_opened());
        assert_eq!(widget.active_route(), "/");
        assert!(!widget.is_animating());
        assert_eq!(widget.render().width, 55.0);
    }

    #[test]
    fn given_dark_mount_when_toggling_and_selecting_then_scenario_holds() {
        let mut widget = SidebarWidget::new(ColorMode::from_name("dark"));
        let mut clock = Instant::now();
        assert_eq!(widget.render().background, DARK.sidebar_background);

        reduce_settled(&mut widget, &mut clock, SidebarIntent::Toggle);
        assert!(widget.is_opened());
        assert_eq!(widget.render().width, 240.0);

        reduce_settled(&mut widget, &mut clock, select("/sales"));
        assert_eq!(widget.active_route(), "/sales");
        let view = widget.render();
        let active: Vec<&str> =
            view.active_entries().map(|entry| entry.title).collect();
        assert_eq!(active, vec!["Sales"]);

        reduce_settled(&mut widget, &mut clock, SidebarIntent::Toggle);
        assert!(!widget.is_opened());
        assert_eq!(widget.active_route(), "/sales");
        assert_eq!(widget.render().width, 55.0);
    }

    #[test]
    fn given_footer_entries_when_selected_then_they_follow_active_rule() {
        let mut widget = SidebarWidget::new(ColorMode::Light);
        let mut clock = Instant::now();

        for path in ["/settings", "/support"] {
            reduce_settled(&mut widget, &mut clock, select(path));

            let view = widget.render();
            let active: Vec<&str> =
                view.active_entries().map(|entry| entry.path).collect();
            assert_eq!(active, vec![path]);
            assert!(view.primary.iter().all(|entry| !entry.is_active()));
        }
    }

    #[test]
    fn given_many_toggles_when_reduced_then_active_route_is_untouched() {
        let mut widget = SidebarWidget::new(ColorMode::Light);
        let mut clock = Instant::now();
        reduce_settled(&mut widget, &mut clock, select("/messages"));

        for round in 0..7 {
            reduce_settled(&mut widget, &mut clock, SidebarIntent::Toggle);
            assert_eq!(widget.is_opened(), round % 2 == 0);
            assert_eq!(widget.active_route(), "/messages");
        }
    }

    #[test]
    fn given_toggle_when_reduced_then_transition_runs_until_settled() {
        let mut widget = SidebarWidget::new(ColorMode::Dark);
        let start = Instant::now();

        let _task =
            widget.reduce(SidebarIntent::Toggle, &SidebarCtx::new(start));
        assert!(widget.is_opened());
        assert!(widget.is_animating());
        assert_eq!(widget.render().width, 55.0);

        let _task = widget.reduce(
            SidebarIntent::AnimationFrame,
            &SidebarCtx::new(start + TRANSITION_DURATION / 3),
        );
        let width = widget.render().width;
        assert!(width > 55.0 && width < 240.0, "width {width}");

        let _task = widget.reduce(
            SidebarIntent::AnimationFrame,
            &SidebarCtx::new(start + TRANSITION_DURATION),
        );
        assert!(!widget.is_animating());
        assert_eq!(widget.render().width, 240.0);
    }

    #[test]
    fn given_double_toggle_at_same_instant_then_no_frames_are_needed() {
        let mut widget = SidebarWidget::new(ColorMode::Light);
        let ctx = SidebarCtx::new(Instant::now());

        let _task = widget.reduce(SidebarIntent::Toggle, &ctx);
        let _task = widget.reduce(SidebarIntent::Toggle, &ctx);

        assert!(!widget.is_opened());
        assert!(!widget.is_animating());
        assert_eq!(widget.render().width, 55.0);
    }

    #[test]
    fn given_hover_on_active_entry_when_rendered_then_active_tone_wins() {
        let mut widget = SidebarWidget::new(ColorMode::Light);
        let mut clock = Instant::now();
        reduce_settled(
            &mut widget,
            &mut clock,
            SidebarIntent::EntryHovered {
                path: String::from("/"),
            },
        );

        let view = widget.render();
        let home = view.entry("/").expect("home entry");
        assert_eq!(home.tone, EntryTone::Active);
        assert_eq!(widget.hovered_route(), Some("/"));
    }

    #[test]
    fn given_unknown_color_when_mounted_then_light_palette_is_used() {
        let widget = SidebarWidget::new(ColorMode::from_name("sepia"));

        assert_eq!(widget.color(), ColorMode::Light);
        assert_eq!(
            widget.render().background,
            crate::theme::LIGHT.sidebar_background
        );
    }
}
