//! Color scheme preference
//!
//! The theme is the only thing the site persists locally.

use anyhow::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Preferences filename in the folio config directory
const PREFERENCES_FILE: &str = "preferences.json";

/// Site color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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

    /// Value for the document's `data-color-scheme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon on the toggle button: it shows the scheme you would switch to
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Theme,
}

/// Load the saved theme, defaulting to light when nothing usable is stored
pub fn load_theme() -> Theme {
    match config::config_path(PREFERENCES_FILE) {
        Some(path) => load_theme_from(&path),
        None => Theme::default(),
    }
}

/// Load the theme from a specific preferences file
pub fn load_theme_from(path: &Path) -> Theme {
    if !path.exists() {
        return Theme::default();
    }
    match config::load_json_file::<Preferences>(path) {
        Ok(prefs) => prefs.theme,
        Err(e) => {
            warn!("Ignoring unreadable preferences: {:#}", e);
            Theme::default()
        }
    }
}

/// Persist the theme to the folio config directory
pub fn save_theme(theme: Theme) -> Result<()> {
    config::save_json(PREFERENCES_FILE, &Preferences { theme })
}

/// Persist the theme to a specific preferences file
pub fn save_theme_to(path: &Path, theme: Theme) -> Result<()> {
    config::save_json_file(path, &Preferences { theme })
}

/// Flip the stored theme and return the new one
pub fn toggle_theme_at(path: &Path) -> Result<Theme> {
    let theme = load_theme_from(path).toggled();
    save_theme_to(path, theme)?;
    Ok(theme)
}
