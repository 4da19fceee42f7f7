//! Common types used throughout the connector
//!
//! Shared type definitions, type aliases, and utility types used
//! across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Resource Kind
// ============================================================================

/// The four catalog entity categories this connector ingests.
///
/// Each kind maps to exactly one fetcher and one output collection named
/// `{type_name}{suffix}` where the suffix is [`ResourceKind::collection_suffix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Store sync products, including their variants and print files
    SyncProduct,
    /// Products stocked in Printful warehouses
    WarehouseProduct,
    /// Shipping countries (keyed by country code, not a numeric id)
    Country,
    /// Countries with tax rate information
    TaxRate,
}

impl ResourceKind {
    /// All kinds, in the order the default configuration lists them
    pub fn all() -> [ResourceKind; 4] {
        [
            ResourceKind::SyncProduct,
            ResourceKind::WarehouseProduct,
            ResourceKind::Country,
            ResourceKind::TaxRate,
        ]
    }

    /// Resolve a configured object type name to a kind.
    ///
    /// Returns `None` for names with no matching fetcher; callers log and
    /// skip those rather than failing the run.
    pub fn parse(name: &str) -> Option<ResourceKind> {
        match name {
            "SyncProduct" => Some(ResourceKind::SyncProduct),
            "WarehouseProduct" => Some(ResourceKind::WarehouseProduct),
            "Country" => Some(ResourceKind::Country),
            "TaxRate" => Some(ResourceKind::TaxRate),
            _ => None,
        }
    }

    /// Collection name suffix appended to the configured type name prefix
    pub fn collection_suffix(&self) -> &'static str {
        match self {
            ResourceKind::SyncProduct => "SyncProduct",
            ResourceKind::WarehouseProduct => "WarehouseProduct",
            ResourceKind::Country => "Country",
            ResourceKind::TaxRate => "TaxRate",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_suffix())
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for treating empty strings as absent values
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!(
            ResourceKind::parse("SyncProduct"),
            Some(ResourceKind::SyncProduct)
        );
        assert_eq!(
            ResourceKind::parse("WarehouseProduct"),
            Some(ResourceKind::WarehouseProduct)
        );
        assert_eq!(ResourceKind::parse("Country"), Some(ResourceKind::Country));
        assert_eq!(ResourceKind::parse("TaxRate"), Some(ResourceKind::TaxRate));
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert_eq!(ResourceKind::parse("Bogus"), None);
        assert_eq!(ResourceKind::parse("syncproduct"), None);
        assert_eq!(ResourceKind::parse(""), None);
    }

    #[test]
    fn test_collection_suffix_roundtrip() {
        for kind in ResourceKind::all() {
            assert_eq!(ResourceKind::parse(kind.collection_suffix()), Some(kind));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceKind::Country.to_string(), "Country");
        assert_eq!(ResourceKind::SyncProduct.to_string(), "SyncProduct");
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("test".to_string().none_if_empty(), Some("test".to_string()));
        assert_eq!(String::new().none_if_empty(), None);
    }
}
