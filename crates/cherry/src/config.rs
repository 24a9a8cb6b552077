//! Class names, event names and display values Cherry works with.

use serde::{Deserialize, Serialize};

use crate::error::CherryError;
use crate::menu::PanelDisplay;

pub const DEFAULT_LINK_CLASS: &str = "cherry-link";
pub const DEFAULT_MENU_BUTTON_CLASS: &str = "cherry-menu-button";
pub const DEFAULT_MENU_CLASS: &str = "cherry-menu";

/// Page-level configuration.
///
/// Every field has a default, so a JSON document only needs to name what it
/// overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CherryConfig {
    /// Class marking link containers.
    pub link_class: String,
    /// Class marking menu triggers.
    pub menu_button_class: String,
    /// Class marking menu panels. Paired with triggers in document order.
    pub menu_class: String,
    /// Event that toggles menus and dismisses them.
    pub menu_event: String,
    /// Event that activates link containers.
    pub link_event: String,
    pub panel_display: PanelDisplay,
}

impl Default for CherryConfig {
    fn default() -> Self {
        Self {
            link_class: DEFAULT_LINK_CLASS.to_string(),
            menu_button_class: DEFAULT_MENU_BUTTON_CLASS.to_string(),
            menu_class: DEFAULT_MENU_CLASS.to_string(),
            menu_event: "touchstart".to_string(),
            link_event: "click".to_string(),
            panel_display: PanelDisplay::default(),
        }
    }
}

impl CherryConfig {
    pub fn from_json(json: &str) -> Result<Self, CherryError> {
        serde_json::from_str(json).map_err(|error| CherryError::InvalidConfig(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_markup() {
        let config = CherryConfig::default();
        assert_eq!(config.link_class, "cherry-link");
        assert_eq!(config.menu_button_class, "cherry-menu-button");
        assert_eq!(config.menu_class, "cherry-menu");
        assert_eq!(config.menu_event, "touchstart");
        assert_eq!(config.link_event, "click");
        assert_eq!(config.panel_display.shown, "block");
        assert_eq!(config.panel_display.hidden, "none");
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = CherryConfig::from_json(
            r#"{ "menu_event": "click", "panel_display": { "shown": "flex" } }"#,
        )
        .unwrap();
        assert_eq!(config.menu_event, "click");
        assert_eq!(config.panel_display.shown, "flex");
        assert_eq!(config.panel_display.hidden, "none");
        assert_eq!(config.menu_class, "cherry-menu");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(CherryConfig::from_json("{}").unwrap(), CherryConfig::default());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let error = CherryConfig::from_json("{ menu_event: ").unwrap_err();
        assert!(matches!(error, CherryError::InvalidConfig(_)));
    }
}
