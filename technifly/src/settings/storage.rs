use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::Settings;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: Settings,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    /// Build a settings load result from explicit parts.
    pub(crate) fn new(settings: Settings, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (Settings, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

pub(crate) fn load_settings_from_path(
    path: &Path,
) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                Settings::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<Settings>(&data) {
        Ok(settings) => {
            Ok(SettingsLoad::new(settings, SettingsLoadStatus::Loaded))
        },
        Err(err) => Ok(SettingsLoad::new(
            Settings::default(),
            SettingsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

pub(crate) fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("technifly")
            .join("settings.json");
    }

    std::env::temp_dir().join("technifly").join("settings.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use technifly_ui_sidebar::ColorMode;

    use super::{Settings, SettingsLoadStatus, load_settings_from_path};

    #[test]
    fn given_valid_file_when_loaded_then_color_is_read() {
        let root = test_temp_dir("valid");
        let path = root.join("settings.json");
        fs::write(&path, r#"{ "sidebar": { "color": "dark" } }"#)
            .expect("settings payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("settings should load successfully");
        let (settings, status) = loaded.into_parts();

        assert!(matches!(status, SettingsLoadStatus::Loaded));
        assert_eq!(settings.color_mode(), ColorMode::Dark);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_loaded_then_defaults_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("settings.json");

        let loaded = load_settings_from_path(&path)
            .expect("missing settings should not fail");
        let (settings, status) = loaded.into_parts();

        assert!(matches!(status, SettingsLoadStatus::Missing));
        assert_eq!(settings, Settings::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_loaded_then_returns_default_with_invalid_status()
    {
        let root = test_temp_dir("invalid_json");
        let path = root.join("settings.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("loading invalid settings should not fail with io error");
        let (settings, status) = loaded.into_parts();

        assert_eq!(settings, Settings::default());
        match status {
            SettingsLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_directory_instead_of_file_when_loaded_then_io_error_is_returned()
    {
        let root = test_temp_dir("directory");

        let result = load_settings_from_path(&root);

        assert!(result.is_err());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "technifly-settings-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
