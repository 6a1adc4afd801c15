mod errors;
mod model;
mod storage;

pub(crate) use errors::SettingsError;
pub(crate) use model::{COLOR_ENV_VAR, Settings};
use storage::SettingsLoadStatus;

impl Settings {
    /// Load settings from disk and apply the environment override.
    ///
    /// Never fails: unreadable or malformed files fall back to defaults.
    pub(crate) fn load() -> Self {
        let settings = match storage::load_settings() {
            Ok(load) => {
                let (settings, status) = load.into_parts();
                log_status(&status);
                settings
            },
            Err(err) => {
                log_error(&err);
                Settings::default()
            },
        };

        let settings =
            settings.with_color_override(std::env::var(COLOR_ENV_VAR).ok());
        log::debug!("sidebar color configured as {:?}", settings.color());
        settings
    }
}

fn log_status(status: &SettingsLoadStatus) {
    let path = storage::settings_path();
    match status {
        SettingsLoadStatus::Loaded => {
            log::info!("settings loaded from {}", path.display());
        },
        SettingsLoadStatus::Missing => {
            log::info!("no settings at {}, using defaults", path.display());
        },
        SettingsLoadStatus::Invalid(reason) => {
            log::warn!("settings at {} are invalid: {reason}", path.display());
        },
    }
}

fn log_error(err: &SettingsError) {
    match err {
        SettingsError::Io(source) => {
            log::warn!("{err}: {source}; using defaults");
        },
    }
}
