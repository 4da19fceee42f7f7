//! Source configuration
//!
//! The connector is configured once at startup and the configuration is
//! never mutated afterwards. Every field has a default except `api_key`,
//! which is required for any live call to succeed.

use crate::error::{Error, Result};
use crate::types::ResourceKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a connector run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Prefix for output collection names (e.g. `PrintfulCountry`)
    #[serde(default = "default_type_name")]
    pub type_name: String,

    /// Object type names to ingest.
    ///
    /// Kept as raw strings so that an unknown name is logged and skipped at
    /// dispatch time instead of failing configuration parsing.
    #[serde(default = "default_object_types")]
    pub object_types: Vec<String>,

    /// Printful API key, sent as a Basic authorization header
    pub api_key: String,

    /// Page size for offset pagination
    #[serde(default = "default_pagination_limit")]
    pub pagination_limit: u32,

    /// Master switch for materializing referenced images to disk
    #[serde(default)]
    pub download_files: bool,

    /// Download each product's thumbnail (on by default, matching the
    /// behavior earlier releases shipped with)
    #[serde(default = "default_true")]
    pub download_product_thumbnail: bool,

    /// Download thumbnail and preview images for every variant file
    #[serde(default)]
    pub download_product_images: bool,

    /// Directory for downloaded images, relative to the working directory
    #[serde(default = "default_image_directory")]
    pub image_directory: PathBuf,
}

fn default_type_name() -> String {
    "Printful".to_string()
}

fn default_object_types() -> Vec<String> {
    ResourceKind::all()
        .iter()
        .map(|k| k.collection_suffix().to_string())
        .collect()
}

fn default_pagination_limit() -> u32 {
    20
}

fn default_true() -> bool {
    true
}

fn default_image_directory() -> PathBuf {
    PathBuf::from("printful_images")
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            type_name: default_type_name(),
            object_types: default_object_types(),
            api_key: String::new(),
            pagination_limit: default_pagination_limit(),
            download_files: false,
            download_product_thumbnail: default_true(),
            download_product_images: false,
            image_directory: default_image_directory(),
        }
    }
}

impl SourceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: SourceConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from an inline JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SourceConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Unknown object type names are intentionally NOT rejected here; they
    /// surface as logged skips when fetchers are dispatched.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if self.pagination_limit == 0 {
            return Err(Error::config("pagination_limit must be greater than 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: SourceConfig = serde_yaml::from_str("api_key: test-key").unwrap();
        assert_eq!(config.type_name, "Printful");
        assert_eq!(
            config.object_types,
            vec!["SyncProduct", "WarehouseProduct", "Country", "TaxRate"]
        );
        assert_eq!(config.pagination_limit, 20);
        assert!(!config.download_files);
        assert!(config.download_product_thumbnail);
        assert!(!config.download_product_images);
        assert_eq!(config.image_directory, PathBuf::from("printful_images"));
    }

    #[test]
    fn test_api_key_is_required() {
        let result: std::result::Result<SourceConfig, _> =
            serde_yaml::from_str("type_name: Printful");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
type_name: Shop
object_types: [Country, TaxRate]
api_key: secret
pagination_limit: 50
download_files: true
download_product_images: true
image_directory: images
"#;
        let config: SourceConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.type_name, "Shop");
        assert_eq!(config.object_types, vec!["Country", "TaxRate"]);
        assert_eq!(config.pagination_limit, 50);
        assert!(config.download_files);
        assert!(config.download_product_thumbnail);
        assert!(config.download_product_images);
        assert_eq!(config.image_directory, PathBuf::from("images"));
    }

    #[test]
    fn test_from_json_str() {
        let config =
            SourceConfig::from_json_str(r#"{"api_key": "k", "object_types": ["Country"]}"#)
                .unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.object_types, vec!["Country"]);
    }

    #[test]
    fn test_validate() {
        let mut config = SourceConfig {
            api_key: "key".to_string(),
            ..SourceConfig::default()
        };
        assert!(config.validate().is_ok());

        config.pagination_limit = 0;
        assert!(config.validate().is_err());

        let empty_key = SourceConfig::default();
        let err = empty_key.validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_unknown_object_types_pass_validation() {
        let config = SourceConfig {
            api_key: "key".to_string(),
            object_types: vec!["Bogus".to_string()],
            ..SourceConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
