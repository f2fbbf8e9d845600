//! Theme system for stride.
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Light and dark presets mirroring the app palette
//! - Hex color parsing for config overrides

use ratatui::style::Color;
use thiserror::Error;

/// Theme colors for the UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// App background color
    pub background: Color,
    /// Body text on the background
    pub on_background: Color,
    /// Component surfaces (tab bar, app bars)
    pub surface: Color,
    /// Text on surfaces
    pub on_surface: Color,
    /// Main interactive color (progress fills, active tab, accents)
    pub primary: Color,
    /// Secondary text (captions, goal lines, stat labels)
    pub secondary_text: Color,
    /// Fill behind card tiles
    pub card_background: Color,
    /// Dimmed chrome (calendar weekday labels, delete badge)
    pub dimmed: Color,
    /// Selected calendar day pill background
    pub pill_bg: Color,
    /// Selected calendar day pill text
    pub pill_fg: Color,
    /// Destructive accents (sign out, delete badge glyph)
    pub error: Color,
    /// Positive state (notifications switch on)
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme - default in a terminal.
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),            // #000000
            on_background: Color::Rgb(255, 255, 255),   // #ffffff
            surface: Color::Rgb(51, 51, 51),            // #333333
            on_surface: Color::Rgb(255, 255, 255),      // #ffffff
            primary: Color::Rgb(56, 149, 211),          // #3895d3 (brand blue)
            secondary_text: Color::Rgb(136, 136, 136),  // #888888
            card_background: Color::Rgb(51, 51, 51),    // #333333
            dimmed: Color::Rgb(139, 143, 146),          // #8b8f92
            pill_bg: Color::Rgb(255, 255, 255),         // #ffffff
            pill_fg: Color::Rgb(25, 33, 38),            // #192126
            error: Color::Rgb(207, 102, 121),           // #cf6679
            success: Color::Rgb(76, 175, 80),           // #4caf50
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),      // #ffffff
            on_background: Color::Rgb(0, 0, 0),         // #000000
            surface: Color::Rgb(255, 255, 255),         // #ffffff
            on_surface: Color::Rgb(0, 0, 0),            // #000000
            primary: Color::Rgb(56, 149, 211),          // #3895d3 (brand blue)
            secondary_text: Color::Rgb(136, 136, 136),  // #888888
            card_background: Color::Rgb(245, 245, 245), // #f5f5f5
            dimmed: Color::Rgb(139, 143, 146),          // #8b8f92
            pill_bg: Color::Rgb(25, 33, 38),            // #192126
            pill_fg: Color::Rgb(255, 255, 255),         // #ffffff
            error: Color::Rgb(176, 0, 32),              // #b00020
            success: Color::Rgb(76, 175, 80),           // #4caf50
        }
    }

    /// Load theme from preset name.
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" | "default" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Replace the primary color (config accent override).
    pub fn with_primary(mut self, primary: Color) -> Self {
        self.primary = primary;
        self
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match hex.len() {
        // #rgb -> each nibble doubled
        3 => {
            let r = channel(0..1)?;
            let g = channel(1..2)?;
            let b = channel(2..3)?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        // #rrggbb
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        // #rrggbbaa, alpha ignored for TUI
        8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Serde deserializer for optional hex colors in config.
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#ff0000"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Ok(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#3895d3"), Ok(Color::Rgb(56, 149, 211)));
    }

    #[test]
    fn test_parse_hex_3() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("0f0"), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_8() {
        assert_eq!(parse_hex_color("#ff0000ff"), Ok(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(parse_hex_color("invalid").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("#ff00").is_err());
    }

    #[test]
    fn test_presets() {
        assert!(Theme::from_preset("dark").is_some());
        assert!(Theme::from_preset("light").is_some());
        assert!(Theme::from_preset("default").is_some());
        assert!(Theme::from_preset("solarized").is_none());
    }

    #[test]
    fn test_primary_override() {
        let theme = Theme::dark().with_primary(Color::Rgb(1, 2, 3));
        assert_eq!(theme.primary, Color::Rgb(1, 2, 3));
        // Everything else untouched
        assert_eq!(theme.success, Theme::dark().success);
    }
}
