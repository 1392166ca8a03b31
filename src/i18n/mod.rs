//! Locale bundles supplying display strings by key.
//!
//! This module provides the translation layer for widget labels. Bundles are
//! TOML files with a `[search]` table holding the strings the search box
//! needs; `en` and `de` are compiled in, and custom bundles can be loaded
//! from disk.
//!
//! Missing keys degrade silently: each field falls back to its English
//! default during deserialization, so a partial bundle never raises and the
//! widget always has something to render.
//!
//! # TOML Format
//!
//! ```toml
//! name = "en"
//!
//! [search]
//! placeholder = "Search..."
//! last-searches = "Last searches"
//! clear-history = "Clear history"
//! you-can-search-for = "You can search for songs, albums and artists"
//! ```

use crate::domain::{Result, UnisonoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A translation bundle.
///
/// Holds the locale identifier and the `search` namespace strings. Loaded
/// from built-in bundles or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Locale {
    /// Locale identifier (e.g., "en").
    #[serde(default = "default_name")]
    pub name: String,

    /// Strings under the `search` namespace.
    #[serde(default)]
    pub search: SearchStrings,
}

/// Display strings for the search box widget.
///
/// Every field defaults to its English value, so bundles may translate any
/// subset of the keys.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchStrings {
    /// Placeholder shown in the empty input.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Heading above the history list in the dropdown.
    #[serde(rename = "last-searches", default = "default_last_searches")]
    pub last_searches: String,

    /// Label for the clear-history action.
    #[serde(rename = "clear-history", default = "default_clear_history")]
    pub clear_history: String,

    /// Hint rendered at the bottom of the dropdown.
    #[serde(rename = "you-can-search-for", default = "default_you_can_search_for")]
    pub you_can_search_for: String,
}

fn default_name() -> String {
    "en".to_string()
}

fn default_placeholder() -> String {
    "Search...".to_string()
}

fn default_last_searches() -> String {
    "Last searches".to_string()
}

fn default_clear_history() -> String {
    "Clear history".to_string()
}

fn default_you_can_search_for() -> String {
    "You can search for songs, albums and artists".to_string()
}

impl Default for SearchStrings {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            last_searches: default_last_searches(),
            clear_history: default_clear_history(),
            you_can_search_for: default_you_can_search_for(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            name: default_name(),
            search: SearchStrings::default(),
        }
    }
}

impl Locale {
    /// Loads a built-in locale by name.
    ///
    /// Supported names: `en`, `de`.
    ///
    /// # Returns
    ///
    /// - `Some(Locale)` if the name is recognized and the bundle parses
    /// - `None` for unknown names
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "en" => include_str!("../../locales/en.toml"),
            "de" => include_str!("../../locales/de.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a locale bundle from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UnisonoError::Io`] when the file cannot be read and
    /// [`UnisonoError::Locale`] when its TOML cannot be parsed. Missing keys
    /// inside a well-formed file are not errors; they fall back to English.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| UnisonoError::Locale(format!("invalid locale TOML: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_bundles_parse() {
        let en = Locale::from_name("en").unwrap();
        assert_eq!(en.name, "en");
        assert_eq!(en.search.placeholder, "Search...");

        let de = Locale::from_name("de").unwrap();
        assert_eq!(de.name, "de");
        assert_eq!(de.search.clear_history, "Verlauf löschen");

        assert!(Locale::from_name("xx").is_none());
    }

    #[test]
    fn partial_bundle_falls_back_to_english() {
        let partial = r#"
name = "fr"

[search]
placeholder = "Rechercher..."
"#;
        let locale: Locale = toml::from_str(partial).unwrap();
        assert_eq!(locale.search.placeholder, "Rechercher...");
        // Untranslated keys degrade silently to English.
        assert_eq!(locale.search.last_searches, "Last searches");
        assert_eq!(locale.search.clear_history, "Clear history");
    }

    #[test]
    fn loads_bundle_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"custom\"\n\n[search]\nplaceholder = \"Find...\"").unwrap();

        let locale = Locale::from_file(file.path()).unwrap();
        assert_eq!(locale.name, "custom");
        assert_eq!(locale.search.placeholder, "Find...");
    }

    #[test]
    fn load_failures_carry_the_matching_error_variant() {
        assert!(matches!(
            Locale::from_file("/nonexistent/bundle.toml"),
            Err(UnisonoError::Io(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search").unwrap();
        assert!(matches!(
            Locale::from_file(file.path()),
            Err(UnisonoError::Locale(_))
        ));
    }
}
