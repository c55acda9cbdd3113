//! Frontend Configuration
//!
//! Read from an optional JSON block in the host page:
//! `<script id="pantry-config" type="application/json">{ ... }</script>`.
//! Every field has a default, so an absent block means stock behavior.
//! Store credentials stay in the JS bridge.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// Id of the page element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "pantry-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pantry config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Query ordering for the live subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PantryConfig {
    /// Remote collection holding ingredient documents
    pub collection: String,
    /// Field the subscription orders by
    pub order_field: String,
    pub direction: SortDirection,
    /// tracing level name
    pub log_level: String,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            collection: "pantry".to_string(),
            order_field: "createdAt".to_string(),
            direction: SortDirection::Desc,
            log_level: "info".to_string(),
        }
    }
}

impl PantryConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Unknown level names fall back to INFO
    pub fn max_level(&self) -> Level {
        console_logger::parse_level(&self.log_level).unwrap_or(Level::INFO)
    }
}

/// Load config from the host page, defaults when the block is absent
pub fn load_from_page() -> Result<PantryConfig, ConfigError> {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) => PantryConfig::from_json(&raw),
        None => Ok(PantryConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PantryConfig::from_json("  ").unwrap();
        assert_eq!(config.collection, "pantry");
        assert_eq!(config.order_field, "createdAt");
        assert_eq!(config.direction, SortDirection::Desc);
        assert_eq!(config.max_level(), Level::INFO);
    }

    #[test]
    fn test_partial_override() {
        let config = PantryConfig::from_json(r#"{"collection":"pantry-dev","logLevel":"debug"}"#).unwrap();
        assert_eq!(config.collection, "pantry-dev");
        assert_eq!(config.order_field, "createdAt");
        assert_eq!(config.max_level(), Level::DEBUG);
    }

    #[test]
    fn test_direction_and_bad_level() {
        let config = PantryConfig::from_json(r#"{"direction":"asc","logLevel":"chatty"}"#).unwrap();
        assert_eq!(config.direction.as_str(), "asc");
        assert_eq!(config.max_level(), Level::INFO);
    }

    #[test]
    fn test_malformed_json() {
        let err = PantryConfig::from_json("{collection:").unwrap_err();
        assert!(err.to_string().starts_with("invalid pantry config"));
    }
}
