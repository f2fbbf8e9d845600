use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::ui::theme::{serde_color, Theme};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user: UserConfig,
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Name shown in the greeting and on the profile screen
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset: "dark" or "light"
    pub theme: String,
    /// Accent color override as a hex string, e.g. "#3895d3"
    #[serde(deserialize_with = "serde_color::deserialize_option")]
    pub accent: Option<Color>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Capture mouse events (clicks, long-press, scroll)
    pub mouse: bool,
    /// Tick interval in milliseconds; drives long-press detection and the
    /// delete-mode wobble
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: UserConfig::default(),
            appearance: AppearanceConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: "Akshat".to_string(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            accent: None,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the configured preset plus the optional accent override into
    /// a concrete theme
    pub fn resolve_theme(&self) -> Theme {
        let theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown theme preset '{}', falling back to dark",
                self.appearance.theme
            );
            Theme::dark()
        });
        match self.appearance.accent {
            Some(accent) => theme.with_primary(accent),
            None => theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.user.name, "Akshat");
        assert_eq!(config.appearance.theme, "dark");
        assert_eq!(config.appearance.accent, None);
        assert!(config.behavior.mouse);
        assert_eq!(config.behavior.tick_rate_ms, 100);
    }

    #[test]
    fn test_partial_config_overrides() {
        let config: Config = toml::from_str(
            r##"
            [user]
            name = "Jess"

            [appearance]
            theme = "light"
            accent = "#ff8800"

            [behavior]
            mouse = false
            "##,
        )
        .unwrap();

        assert_eq!(config.user.name, "Jess");
        assert_eq!(config.appearance.theme, "light");
        assert_eq!(config.appearance.accent, Some(Color::Rgb(0xff, 0x88, 0x00)));
        assert!(!config.behavior.mouse);
        // Untouched section keeps its default
        assert_eq!(config.behavior.tick_rate_ms, 100);
    }

    #[test]
    fn test_unknown_preset_resolves_to_dark() {
        let mut config = Config::default();
        config.appearance.theme = "solarized".to_string();
        assert_eq!(config.resolve_theme().background, Theme::dark().background);
    }

    #[test]
    fn test_accent_override_recolors_primary() {
        let mut config = Config::default();
        config.appearance.accent = Some(Color::Rgb(1, 2, 3));
        assert_eq!(config.resolve_theme().primary, Color::Rgb(1, 2, 3));
    }
}
