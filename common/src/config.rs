//! Gallery configuration.
//!
//! Every field has a default, so a partial JSON document (or none at all)
//! yields a usable configuration. The frontend reads the document from an
//! inline `<script id="gallery-config" type="application/json">` element.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIB: u64 = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gallery configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid gallery configuration: {0}")]
    Invalid(String),
}

/// Constraints applied by the validation rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Files of this size or larger are rejected.
    pub max_image_bytes: u64,
    pub accepted_mime_types: Vec<String>,
    pub title_min_chars: usize,
    pub title_max_chars: usize,
    pub description_max_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_image_bytes: 10 * MIB,
            accepted_mime_types: ["image/jpeg", "image/jpg", "image/png", "image/gif"]
                .into_iter()
                .map(String::from)
                .collect(),
            title_min_chars: 2,
            title_max_chars: 20,
            description_max_chars: 65,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub limits: ValidationLimits,
    pub images_endpoint: String,
    pub assets_endpoint: String,
    /// Cache key of the record collection, invalidated after each persisted record.
    pub collection_key: String,
    pub toast_duration_ms: u32,
    pub grid_columns: usize,
    /// One of `error`, `warn`, `info`, `debug`, `trace`, `off`.
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            limits: ValidationLimits::default(),
            images_endpoint: "/api/images".to_string(),
            assets_endpoint: "/api/assets".to_string(),
            collection_key: "images".to_string(),
            toast_duration_ms: 3000,
            grid_columns: 3,
            log_level: "info".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.title_min_chars > limits.title_max_chars {
            return Err(ConfigError::Invalid(format!(
                "title_min_chars ({}) exceeds title_max_chars ({})",
                limits.title_min_chars, limits.title_max_chars
            )));
        }
        if limits.accepted_mime_types.is_empty() {
            return Err(ConfigError::Invalid(
                "accepted_mime_types must not be empty".to_string(),
            ));
        }
        if self.grid_columns == 0 {
            return Err(ConfigError::Invalid("grid_columns must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = GalleryConfig::from_json("{}").unwrap();
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.limits.max_image_bytes, 10 * 1024 * 1024);
        assert_eq!(config.collection_key, "images");
    }

    #[test]
    fn partial_limits_keep_other_defaults() {
        let config =
            GalleryConfig::from_json(r#"{"limits":{"title_max_chars":30},"grid_columns":4}"#)
                .unwrap();
        assert_eq!(config.limits.title_max_chars, 30);
        assert_eq!(config.limits.title_min_chars, 2);
        assert_eq!(config.grid_columns, 4);
    }

    #[test]
    fn inconsistent_limits_are_rejected() {
        let err = GalleryConfig::from_json(r#"{"limits":{"title_min_chars":25}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GalleryConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = GalleryConfig {
            log_level: "chatty".to_string(),
            ..GalleryConfig::default()
        };
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
