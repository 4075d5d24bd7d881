//! Configuration and color scheme management for euroulette.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.euroulette/config.toml`
//! - Built-in color schemes for the wheel pockets
//! - The `EUROULETTE_DEBUG` environment flag
//!
//! # Configuration File
//!
//! The configuration file is located at `~/.euroulette/config.toml`:
//!
//! ```toml
//! # Color scheme: default, solarized, high-contrast
//! color_scheme = "solarized"
//! ```
//!
//! A missing or unreadable file falls back to defaults; an unknown scheme
//! name falls back to the default scheme.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::wheel::SlotColor;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color scheme name
    pub color_scheme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_scheme: "default".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Get config file path
    fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".euroulette").join("config.toml"))
    }

    /// Get the color scheme
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::by_name(&self.color_scheme)
    }
}

/// Whether the `EUROULETTE_DEBUG` flag is set. Anything other than a valid
/// boolean ("true"/"false") counts as disabled.
pub fn debug_enabled() -> bool {
    env::var("EUROULETTE_DEBUG")
        .ok()
        .and_then(|value| value.parse::<bool>().ok())
        .unwrap_or(false)
}

/// Color definition (RGB)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to crossterm Color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Color scheme definition
///
/// A scheme maps the three pocket classes to background colors plus a
/// foreground used on top of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,

    /// Background for red pockets
    pub red_bg: Color,
    /// Background for black pockets
    pub black_bg: Color,
    /// Background for the zero pocket
    pub green_bg: Color,
    /// Label foreground on all pockets
    pub label_fg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_scheme()
    }
}

impl ColorScheme {
    /// Default color scheme, close to the bright ANSI backgrounds of a
    /// classic terminal palette
    pub fn default_scheme() -> Self {
        Self {
            name: "default".to_string(),
            red_bg: Color::new(205, 49, 49),
            black_bg: Color::new(102, 102, 102),
            green_bg: Color::new(13, 188, 121),
            label_fg: Color::new(255, 255, 255),
        }
    }

    /// Solarized-toned scheme
    pub fn solarized() -> Self {
        Self {
            name: "solarized".to_string(),
            red_bg: Color::new(220, 50, 47),
            black_bg: Color::new(7, 54, 66),
            green_bg: Color::new(133, 153, 0),
            label_fg: Color::new(253, 246, 227),
        }
    }

    /// High-contrast scheme
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            red_bg: Color::new(255, 0, 0),
            black_bg: Color::new(0, 0, 0),
            green_bg: Color::new(0, 255, 0),
            label_fg: Color::new(255, 255, 255),
        }
    }

    /// Get scheme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "solarized" => Self::solarized(),
            "high-contrast" | "high_contrast" => Self::high_contrast(),
            _ => Self::default_scheme(),
        }
    }

    /// List available schemes
    pub fn list() -> Vec<&'static str> {
        vec!["default", "solarized", "high-contrast"]
    }

    /// Background color for a pocket class
    pub fn background_for(&self, color: SlotColor) -> Color {
        match color {
            SlotColor::Red => self.red_bg,
            SlotColor::Black => self.black_bg,
            SlotColor::Green => self.green_bg,
        }
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_by_name() {
        assert_eq!(ColorScheme::by_name("solarized").name, "solarized");
        assert_eq!(ColorScheme::by_name("HIGH-CONTRAST").name, "high-contrast");
        assert_eq!(ColorScheme::by_name("no-such-scheme").name, "default");
    }

    #[test]
    fn test_every_listed_scheme_resolves() {
        for name in ColorScheme::list() {
            assert_eq!(ColorScheme::by_name(name).name, name);
        }
    }

    #[test]
    fn test_config_parses_from_toml() {
        let config: Config = toml::from_str("color_scheme = \"solarized\"").unwrap();
        assert_eq!(config.color_scheme, "solarized");
    }

    #[test]
    fn test_config_defaults_on_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.color_scheme, "default");
    }

    #[test]
    fn test_background_per_class() {
        let scheme = ColorScheme::default_scheme();
        let red = scheme.background_for(SlotColor::Red);
        let green = scheme.background_for(SlotColor::Green);
        assert_ne!((red.r, red.g, red.b), (green.r, green.g, green.b));
    }
}
