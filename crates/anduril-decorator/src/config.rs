//! Decorator configuration.
//!
//! The defaults reproduce the classes and identifiers the blog templates
//! expect. Every field is optional on input, so a page can override only the
//! values it needs.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::{DecorateError, Result};

/// Classes, labels and identifiers used by the decoration passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoratorConfig {
    /// Class assigned to every `table`.
    #[serde(default = "default_table_class")]
    pub table_class: String,

    /// Class assigned to every `blockquote`.
    #[serde(default = "default_blockquote_class")]
    pub blockquote_class: String,

    /// Class assigned to every `pre` block.
    #[serde(default = "default_pre_class")]
    pub pre_class: String,

    /// Class assigned to `code` elements inside `pre` blocks, if any.
    #[serde(default)]
    pub code_class: Option<String>,

    /// Class of the injected copy button.
    #[serde(default = "default_button_class")]
    pub button_class: String,

    /// Visible label of the injected copy button.
    #[serde(default = "default_button_label")]
    pub button_label: String,

    /// Id of the search input focused by the shortcut.
    #[serde(default = "default_search_input_id")]
    pub search_input_id: String,

    /// Key that focuses the search input.
    #[serde(default = "default_shortcut_key")]
    pub shortcut_key: String,

    /// Scroll-to-top button settings.
    #[serde(default)]
    pub scroll: ScrollConfig,
}

/// Scroll-to-top button configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Id of the scroll-to-top button.
    #[serde(default = "default_scroll_button_id")]
    pub button_id: String,

    /// Vertical scroll offset (px) past which the button is shown.
    #[serde(default = "default_scroll_threshold")]
    pub threshold: f64,
}

// Default value functions
fn default_table_class() -> String {
    "table".to_string()
}

fn default_blockquote_class() -> String {
    "text-secondary fst-italic".to_string()
}

fn default_pre_class() -> String {
    "font-monospace bg-light".to_string()
}

fn default_button_class() -> String {
    "btn btn-primary float-end".to_string()
}

fn default_button_label() -> String {
    "Copy".to_string()
}

fn default_search_input_id() -> String {
    "search-input-box".to_string()
}

fn default_shortcut_key() -> String {
    "/".to_string()
}

fn default_scroll_button_id() -> String {
    "scrollToTop".to_string()
}

fn default_scroll_threshold() -> f64 {
    150.0
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            table_class: default_table_class(),
            blockquote_class: default_blockquote_class(),
            pre_class: default_pre_class(),
            code_class: None,
            button_class: default_button_class(),
            button_label: default_button_label(),
            search_input_id: default_search_input_id(),
            shortcut_key: default_shortcut_key(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            button_id: default_scroll_button_id(),
            threshold: default_scroll_threshold(),
        }
    }
}

impl DecoratorConfig {
    /// Parse and validate configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DecorateError::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a JS object.
    ///
    /// `undefined` and `null` yield the defaults.
    pub fn from_js(value: JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| DecorateError::config(format!("Failed to read config object: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.button_label.is_empty() {
            return Err(DecorateError::config("button_label cannot be empty"));
        }

        if self.search_input_id.is_empty() {
            return Err(DecorateError::config("search_input_id cannot be empty"));
        }

        if self.shortcut_key.is_empty() {
            return Err(DecorateError::config("shortcut_key cannot be empty"));
        }

        if self.scroll.button_id.is_empty() {
            return Err(DecorateError::config("scroll.button_id cannot be empty"));
        }

        if !self.scroll.threshold.is_finite() || self.scroll.threshold < 0.0 {
            return Err(DecorateError::config(
                "scroll.threshold must be a finite, non-negative number",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = DecoratorConfig::default();

        assert_eq!(config.table_class, "table");
        assert_eq!(config.blockquote_class, "text-secondary fst-italic");
        assert_eq!(config.pre_class, "font-monospace bg-light");
        assert!(config.code_class.is_none());
        assert_eq!(config.button_class, "btn btn-primary float-end");
        assert_eq!(config.button_label, "Copy");
        assert_eq!(config.search_input_id, "search-input-box");
        assert_eq!(config.shortcut_key, "/");
        assert_eq!(config.scroll.button_id, "scrollToTop");
        assert_eq!(config.scroll.threshold, 150.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = DecoratorConfig::from_json("{}").expect("parse config");
        assert_eq!(config, DecoratorConfig::default());
    }

    #[test]
    fn test_flex_layout_override() {
        let json = r#"{
            "pre_class": "d-flex",
            "code_class": "col p-2 me-2 font-monospace bg-light border border-secondary rounded",
            "button_class": "col-1 align-self-start btn btn-primary",
            "scroll": { "threshold": 300 }
        }"#;

        let config = DecoratorConfig::from_json(json).expect("parse config");

        assert_eq!(config.pre_class, "d-flex");
        assert!(config.code_class.as_deref().is_some_and(|c| c.contains("rounded")));
        assert_eq!(config.button_class, "col-1 align-self-start btn btn-primary");
        assert_eq!(config.scroll.threshold, 300.0);
        assert_eq!(config.scroll.button_id, "scrollToTop");
        assert_eq!(config.table_class, "table");
    }

    #[test]
    fn test_config_validation_empty_label() {
        let result = DecoratorConfig::from_json(r#"{ "button_label": "" }"#);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("button_label cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_negative_threshold() {
        let result = DecoratorConfig::from_json(r#"{ "scroll": { "threshold": -1 } }"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("scroll.threshold"));
    }

    #[test]
    fn test_config_malformed_json() {
        let result = DecoratorConfig::from_json("{ not json");
        assert!(matches!(result, Err(DecorateError::Config(_))));
    }
}
