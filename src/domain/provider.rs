//! Search provider descriptors and their dropdown projections.
//!
//! A [`Provider`] describes an external metadata source (Discogs, Musicbrainz,
//! iTunes, ...) that the unified search workflow can query. Providers are
//! loaded by the host application and treated as read-only here; their
//! identity is the raw `source_name`.
//!
//! [`ProviderOption`] is the projection the dropdown widget renders. It is
//! derived fresh on every render from the provider list and the currently
//! selected provider name, and is never stored.

use serde::{Deserialize, Serialize};

/// An external search source offering a display name and an internal identifier.
///
/// # Fields
///
/// - `source_name`: Internal identifier, also the value dispatched when the
///   provider is selected. Comparisons against the store's selected provider
///   are case-sensitive on this raw string.
/// - `search_name`: Human-readable name shown in the provider dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub source_name: String,
    pub search_name: String,
}

impl Provider {
    /// Creates a provider descriptor from its identifier and display name.
    #[must_use]
    pub fn new(source_name: impl Into<String>, search_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            search_name: search_name.into(),
        }
    }

    /// Projects this provider into its dropdown option.
    ///
    /// The option key is the lowercased `source_name`, the display text is the
    /// `search_name`, and the value is the raw `source_name`. Selection
    /// matching elsewhere remains case-sensitive on the raw name even though
    /// the key is lowercased.
    ///
    /// # Example
    ///
    /// ```
    /// use unisono::domain::Provider;
    ///
    /// let option = Provider::new("Spotify", "Spotify").to_option();
    /// assert_eq!(option.key, "spotify");
    /// assert_eq!(option.value, "Spotify");
    /// ```
    #[must_use]
    pub fn to_option(&self) -> ProviderOption {
        ProviderOption {
            key: self.source_name.to_lowercase(),
            text: self.search_name.clone(),
            value: self.source_name.clone(),
        }
    }
}

/// Dropdown projection of a [`Provider`].
///
/// Computed on demand and never persisted. `value` round-trips back into the
/// select-provider command when the user picks this option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOption {
    /// Lowercased `source_name`, used as a stable widget key.
    pub key: String,

    /// Display text (the provider's `search_name`).
    pub text: String,

    /// Raw `source_name`, dispatched on selection.
    pub value: String,
}

/// Resolves the option for whichever provider matches the selected identifier.
///
/// The match is case-sensitive on the raw `source_name`. Returns `None` when
/// nothing is selected or the identifier matches no known provider, in which
/// case the widget renders without a selected option.
#[must_use]
pub fn selected_option(providers: &[Provider], selected: Option<&str>) -> Option<ProviderOption> {
    let selected = selected?;
    providers
        .iter()
        .find(|provider| provider.source_name == selected)
        .map(Provider::to_option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_lowercases_key_but_keeps_raw_value() {
        let option = Provider::new("Spotify", "Spotify").to_option();
        assert_eq!(option.key, "spotify");
        assert_eq!(option.text, "Spotify");
        assert_eq!(option.value, "Spotify");
    }

    #[test]
    fn selected_option_matches_case_sensitively() {
        let providers = vec![Provider::new("Spotify", "Spotify")];

        // The lowercased key is not a valid selection identifier.
        assert_eq!(selected_option(&providers, Some("spotify")), None);

        let resolved = selected_option(&providers, Some("Spotify")).unwrap();
        assert_eq!(resolved.key, "spotify");
        assert_eq!(resolved.value, "Spotify");
    }

    #[test]
    fn selected_option_absent_when_nothing_selected() {
        let providers = vec![Provider::new("Discogs", "Discogs")];
        assert_eq!(selected_option(&providers, None), None);
        assert_eq!(selected_option(&[], Some("Discogs")), None);
    }
}
