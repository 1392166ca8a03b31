//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme for the search box, with one built-in
//! theme (`nocturne`) and support for custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to 24-bit ANSI escape
//! sequences.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! border = "#45475a"
//! border_focused = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! placeholder_fg = "#6c7086"
//! provider_fg = "#89b4fa"
//! label_fg = "#f9e2af"
//! loading_fg = "#a6e3a1"
//! disabled_fg = "#585b70"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! ```

use crate::domain::{Result, UnisonoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from the
/// built-in theme or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Border color for the unfocused search box.
    pub border: String,
    /// Border color while the dropdown is visible.
    pub border_focused: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (ages, hints).
    pub text_dim: String,
    /// Placeholder text color.
    pub placeholder_fg: String,

    /// Provider name and option color.
    pub provider_fg: String,
    /// Dropdown section label color.
    pub label_fg: String,
    /// Loading indicator color.
    pub loading_fg: String,
    /// Color for the whole widget while disabled.
    pub disabled_fg: String,

    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `nocturne`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "nocturne" => include_str!("../../themes/nocturne.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UnisonoError::Io`] when the file cannot be read and
    /// [`UnisonoError::Theme`] when its TOML cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| UnisonoError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The built-in `nocturne` theme.
    fn default() -> Self {
        Self::from_name("nocturne").unwrap_or_else(|| Self {
            name: "fallback".to_string(),
            colors: ThemeColors {
                border: "#45475a".to_string(),
                border_focused: "#f5c2e7".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                placeholder_fg: "#6c7086".to_string(),
                provider_fg: "#89b4fa".to_string(),
                label_fg: "#f9e2af".to_string(),
                loading_fg: "#a6e3a1".to_string(),
                disabled_fg: "#585b70".to_string(),
                match_highlight_fg: "#1e1e2e".to_string(),
                match_highlight_bg: "#f9e2af".to_string(),
            },
        })
    }
}
