use technifly_ui_sidebar::NavigationManifest;

/// App-level router receiving navigation intents from the sidebar.
///
/// Page content is rendered elsewhere; the navigator only tracks where the
/// user asked to go.
#[derive(Debug)]
pub(crate) struct Navigator {
    manifest: NavigationManifest,
    location: String,
}

impl Navigator {
    pub(crate) fn new(manifest: NavigationManifest, initial: &str) -> Self {
        Self {
            manifest,
            location: String::from(initial),
        }
    }

    pub(crate) fn location(&self) -> &str {
        &self.location
    }

    /// Title of the manifest entry matching the current location.
    pub(crate) fn current_title(&self) -> Option<&'static str> {
        self.manifest.find(&self.location).map(|entry| entry.title)
    }

    /// Move to `path`, replacing the current location.
    pub(crate) fn navigate(&mut self, path: String) {
        if self.manifest.find(&path).is_none() {
            log::warn!("navigating to path outside the manifest: {path}");
        }
        log::info!("navigate {} -> {path}", self.location);

        self.location = path;
    }
}

#[cfg(test)]
mod tests {
    use technifly_ui_sidebar::NavigationManifest;

    use super::Navigator;

    #[test]
    fn given_new_navigator_then_location_is_initial_path() {
        let navigator = Navigator::new(NavigationManifest::default(), "/");

        assert_eq!(navigator.location(), "/");
        assert_eq!(navigator.current_title(), Some("Home"));
    }

    #[test]
    fn given_navigations_when_applied_then_only_latest_location_is_kept() {
        let mut navigator =
            Navigator::new(NavigationManifest::default(), "/");

        navigator.navigate(String::from("/payments"));
        assert_eq!(navigator.location(), "/payments");
        assert_eq!(navigator.current_title(), Some("Payments"));

        navigator.navigate(String::from("/settings"));
        assert_eq!(navigator.location(), "/settings");
        assert_eq!(navigator.current_title(), Some("Settings"));
    }

    #[test]
    fn given_repeated_navigation_to_same_path_then_location_is_stable() {
        let mut navigator =
            Navigator::new(NavigationManifest::default(), "/");

        for _ in 0..1_000 {
            navigator.navigate(String::from("/"));
        }

        assert_eq!(navigator.location(), "/");
        assert_eq!(navigator.current_title(), Some("Home"));
    }

    #[test]
    fn given_unknown_path_when_navigated_then_location_has_no_title() {
        let mut navigator =
            Navigator::new(NavigationManifest::default(), "/");

        navigator.navigate(String::from("/reports"));

        assert_eq!(navigator.location(), "/reports");
        assert_eq!(navigator.current_title(), None);
    }
}
