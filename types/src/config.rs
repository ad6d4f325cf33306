//! Page configuration for the encounter calculator frontend.
//!
//! Every field has a default matching the server-rendered markup, so the page
//! only needs to provide the keys it wants to change. Keys are camelCase, as
//! written in the page's `window.encountersConfig` object.

use serde::{Deserialize, Serialize};

use crate::notification::NOTIFICATION_DURATION_MS;

fn default_true() -> bool {
    true
}

fn default_notification_duration() -> u32 {
    NOTIFICATION_DURATION_MS
}

fn default_banner_key() -> String {
    "patreon-banner-dismissed".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    #[serde(default)]
    pub selectors: Selectors,
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub hypermedia: HypermediaConfig,
    #[serde(default = "default_notification_duration")]
    pub notification_duration_ms: u32,
    #[serde(default = "default_banner_key")]
    pub banner_storage_key: String,
    /// Use `.` as thousands separator (`it-IT`).
    #[serde(default = "default_true")]
    pub european_number_format: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            messages: Messages::default(),
            hypermedia: HypermediaConfig::default(),
            notification_duration_ms: default_notification_duration(),
            banner_storage_key: default_banner_key(),
            european_number_format: true,
        }
    }
}

/// Ids, classes and attribute names the frontend looks for.
///
/// Ids are stored without `#`, classes without `.`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub banner_id: String,
    pub banner_dismiss_class: String,
    pub monster_row_class: String,
    pub add_button_class: String,
    pub detail_row_class: String,
    pub selected_list_id: String,
    pub selected_count_id: String,
    pub xp_used_id: String,
    pub xp_remaining_id: String,
    /// `name` attribute of the budget input.
    pub budget_input_name: String,
    pub result_container_id: String,
    /// Controls with this class get the busy state during requests.
    pub button_class: String,
    pub expanded_class: String,
    pub over_budget_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            banner_id: "patreon-banner".to_string(),
            banner_dismiss_class: "patreon-banner-dismiss".to_string(),
            monster_row_class: "monster-row".to_string(),
            add_button_class: "monster-add-btn".to_string(),
            detail_row_class: "monster-detail-row".to_string(),
            selected_list_id: "selected-monsters-list".to_string(),
            selected_count_id: "selected-count".to_string(),
            xp_used_id: "xp-used".to_string(),
            xp_remaining_id: "xp-remaining".to_string(),
            budget_input_name: "max_xp".to_string(),
            result_container_id: "result-container".to_string(),
            button_class: "btn".to_string(),
            expanded_class: "expanded".to_string(),
            over_budget_class: "over-budget".to_string(),
        }
    }
}

impl Selectors {
    pub fn monster_row(&self) -> String {
        format!(".{}", self.monster_row_class)
    }

    pub fn add_button(&self) -> String {
        format!(".{}", self.add_button_class)
    }

    pub fn banner_dismiss(&self) -> String {
        format!(".{}", self.banner_dismiss_class)
    }

    pub fn budget_input(&self) -> String {
        format!("input[name=\"{}\"]", self.budget_input_name)
    }

    /// Every expanded detail row and every expanded owner row.
    pub fn expanded_rows(&self) -> String {
        format!(
            ".{detail}.{exp}, .{row}.{exp}",
            detail = self.detail_row_class,
            row = self.monster_row_class,
            exp = self.expanded_class,
        )
    }
}

/// User-facing strings. Defaults are Italian, like the rest of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub loading: String,
    pub request_error: String,
    pub empty_selection: String,
    pub remove_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            loading: "Caricamento...".to_string(),
            request_error: "Errore nel caricamento. Riprova.".to_string(),
            empty_selection: "Nessun mostro selezionato".to_string(),
            remove_label: "Rimuovi".to_string(),
        }
    }
}

/// Settings pushed into the hypermedia engine's `config` at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HypermediaConfig {
    pub request_class: String,
    pub history_enabled: bool,
}

impl Default for HypermediaConfig {
    fn default() -> Self {
        Self {
            request_class: "loading".to_string(),
            history_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: UiConfig = toml::from_str("").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.notification_duration_ms, 3000);
        assert!(config.european_number_format);
    }

    #[test]
    fn test_partial_override() {
        let config: UiConfig = toml::from_str(
            r#"
notificationDurationMs = 5000

[selectors]
resultContainerId = "results"

[messages]
loading = "Loading..."
"#,
        )
        .unwrap();

        assert_eq!(config.notification_duration_ms, 5000);
        assert_eq!(config.selectors.result_container_id, "results");
        assert_eq!(config.selectors.monster_row_class, "monster-row");
        assert_eq!(config.messages.loading, "Loading...");
        assert_eq!(config.messages.request_error, "Errore nel caricamento. Riprova.");
        assert_eq!(config.banner_storage_key, "patreon-banner-dismissed");
    }

    #[test]
    fn test_only_camel_case_keys_apply() {
        let config: UiConfig = toml::from_str(
            r#"
notification_duration_ms = 5000
europeanNumberFormat = false

[hypermedia]
historyEnabled = false
"#,
        )
        .unwrap();

        assert_eq!(config.notification_duration_ms, 3000);
        assert!(!config.european_number_format);
        assert!(!config.hypermedia.history_enabled);
        assert_eq!(config.hypermedia.request_class, "loading");
    }

    #[test]
    fn test_selector_strings() {
        let s = Selectors::default();
        assert_eq!(s.monster_row(), ".monster-row");
        assert_eq!(s.add_button(), ".monster-add-btn");
        assert_eq!(s.budget_input(), "input[name=\"max_xp\"]");
        assert_eq!(
            s.expanded_rows(),
            ".monster-detail-row.expanded, .monster-row.expanded"
        );
    }
}
