use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub theme: Theme,
    pub expiry_reminders: bool,
    pub recipe_suggestions: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            expiry_reminders: true,
            recipe_suggestions: true,
        }
    }
}

/// Partial settings change; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub theme: Option<Theme>,
    pub expiry_reminders: Option<bool>,
    pub recipe_suggestions: Option<bool>,
}

/// User preferences, optionally mirrored to a JSON file.
///
/// Without a path the settings only live for the session, like the rest of
/// the app state.
pub struct SettingsStore {
    path: Option<PathBuf>,
    data: UserSettings,
}

impl SettingsStore {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: UserSettings::default(),
        }
    }

    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring malformed settings in {}: {err}", path.display());
                UserSettings::default()
            })
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path: Some(path),
            data,
        })
    }

    pub fn get(&self) -> UserSettings {
        self.data.clone()
    }

    pub fn update(&mut self, update: SettingsUpdate) -> Result<UserSettings> {
        let mut next = self.data.clone();
        if let Some(theme) = update.theme {
            next.theme = theme;
        }
        if let Some(enabled) = update.expiry_reminders {
            next.expiry_reminders = enabled;
        }
        if let Some(enabled) = update.recipe_suggestions {
            next.recipe_suggestions = enabled;
        }

        self.persist(&next)?;
        self.data = next;
        Ok(self.data.clone())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.data.theme.toggled();
        self.update(SettingsUpdate {
            theme: Some(theme),
            ..Default::default()
        })?;
        Ok(theme)
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }
}
