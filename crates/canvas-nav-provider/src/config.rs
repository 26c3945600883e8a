//! Typed viewer configuration.
//!
//! Replaces ad-hoc dynamic config access with structs deserialized once at
//! session construction. Only the sections this layer consumes are modeled;
//! hosts keep their remaining configuration to themselves.

use serde::Deserialize;

use canvas_nav::LocaleEntry;

/// Static viewer configuration, parsed once per session.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ViewerConfig {
    /// User-facing option switches.
    #[serde(default)]
    pub options: ViewerOptions,
    /// Locale section.
    #[serde(default)]
    pub localisation: LocalisationConfig,
}

impl ViewerConfig {
    /// Parse a configuration document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Configured locales as negotiation entries, in configured order.
    pub fn locale_entries(&self) -> Vec<LocaleEntry> {
        self.localisation
            .locales
            .iter()
            .map(LocaleSpec::to_entry)
            .collect()
    }
}

/// Option switches the session layer consumes.
///
/// Field names follow the viewer's camelCase configuration documents.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerOptions {
    /// Whether the user wants two-page spreads when the manifest supports
    /// them.
    pub paging_enabled: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            paging_enabled: true,
        }
    }
}

/// Locale section of the configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LocalisationConfig {
    /// Available display locales, in configured (fallback) order.
    ///
    /// Names must be unique; the loader guarantees this, it is not
    /// re-checked downstream.
    #[serde(default)]
    pub locales: Vec<LocaleSpec>,
}

/// One configured locale.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LocaleSpec {
    /// IETF-style tag (e.g. `en-GB`).
    pub name: String,
    /// Human-readable name for locale switchers.
    #[serde(default)]
    pub label: Option<String>,
}

impl LocaleSpec {
    fn to_entry(&self) -> LocaleEntry {
        LocaleEntry {
            name: self.name.clone(),
            label: self.label.clone(),
        }
    }
}

impl From<LocaleSpec> for LocaleEntry {
    fn from(spec: LocaleSpec) -> Self {
        Self {
            name: spec.name,
            label: spec.label,
        }
    }
}
