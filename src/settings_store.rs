use std::sync::Arc;

use log::debug;

use crate::error::StorageError;
use crate::persisted::PersistedValue;
use crate::settings::{AppSettings, FontSize, Theme};
use crate::storage::KeyValueStorage;

pub const SETTINGS_KEY: &str = "app-settings";

/// Owner of the persisted display preferences.
#[derive(Debug)]
pub struct SettingsStore {
    settings: PersistedValue<AppSettings>,
}

impl SettingsStore {
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            settings: PersistedValue::load(storage, SETTINGS_KEY, AppSettings::default()),
        }
    }

    pub fn settings(&self) -> AppSettings {
        *self.settings.get()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        debug!("Setting theme to {}", theme.as_str());
        self.settings.update(|prev| AppSettings { theme, ..*prev })
    }

    /// Flips between light and dark and returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        let theme = self.settings.get().theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn set_font_size(&mut self, font_size: FontSize) -> Result<(), StorageError> {
        debug!("Setting font size to {}", font_size.as_str());
        self.settings.update(|prev| AppSettings { font_size, ..*prev })
    }

    pub fn font_size_class(&self) -> &'static str {
        self.settings.get().font_size.css_class()
    }

    pub(crate) fn reload(&mut self) {
        self.settings.reload();
    }
}
