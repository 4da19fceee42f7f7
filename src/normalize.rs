//! Record shaping
//!
//! Vendor records are semi-structured JSON; this module adds the derived
//! fields every emitted node carries: `slug` from `name`, a numeric
//! `retail_price` on variants, and the country-code `id` remap.

use crate::types::JsonValue;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Runs of characters that cannot appear in a slug
static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Derive a slug: lowercased, hyphenated, trimmed.
///
/// Slugs are not guaranteed unique across records; collisions are the
/// downstream consumer's problem.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_SLUG
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Set `slug` from `name` if (and only if) the record has a name
pub fn assign_slug(record: &mut JsonValue) {
    let Some(name) = record.get("name").and_then(Value::as_str) else {
        return;
    };
    let slug = slugify(name);
    record["slug"] = Value::String(slug);
}

/// Coerce a variant's `retail_price` to a JSON number.
///
/// The API reports prices as strings (`"19.99"`). An unparseable price
/// becomes null, matching how a NaN serializes.
pub fn coerce_retail_price(variant: &mut JsonValue) {
    let Some(price) = variant.get("retail_price") else {
        return;
    };

    let parsed = match price {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    variant["retail_price"] = parsed
        .and_then(serde_json::Number::from_f64)
        .map_or(Value::Null, Value::Number);
}

/// Remap a country record's `id` to its `code` field.
///
/// Countries carry no numeric id; the code is the stable key.
pub fn remap_country_id(record: &mut JsonValue) {
    if let Some(code) = record.get("code").cloned() {
        record["id"] = code;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("United States", "united-states")]
    #[test_case("T-Shirt  (Unisex)", "t-shirt-unisex")]
    #[test_case("Café au Lait", "caf-au-lait")]
    #[test_case("  trimmed  ", "trimmed")]
    #[test_case("", "")]
    fn test_slugify(input: &str, expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn test_assign_slug_requires_name() {
        let mut with_name = json!({"name": "United States"});
        assign_slug(&mut with_name);
        assert_eq!(with_name["slug"], "united-states");

        let mut without_name = json!({"id": 1});
        assign_slug(&mut without_name);
        assert!(without_name.get("slug").is_none());
    }

    #[test]
    fn test_coerce_retail_price_from_string() {
        let mut variant = json!({"retail_price": "19.99"});
        coerce_retail_price(&mut variant);
        assert_eq!(variant["retail_price"], json!(19.99));
    }

    #[test]
    fn test_coerce_retail_price_passthrough_number() {
        let mut variant = json!({"retail_price": 12.5});
        coerce_retail_price(&mut variant);
        assert_eq!(variant["retail_price"], json!(12.5));
    }

    #[test]
    fn test_coerce_retail_price_unparseable_becomes_null() {
        let mut variant = json!({"retail_price": "free"});
        coerce_retail_price(&mut variant);
        assert_eq!(variant["retail_price"], JsonValue::Null);
    }

    #[test]
    fn test_coerce_retail_price_absent_is_untouched() {
        let mut variant = json!({"id": 1});
        coerce_retail_price(&mut variant);
        assert!(variant.get("retail_price").is_none());
    }

    #[test]
    fn test_remap_country_id() {
        let mut country = json!({"code": "US", "name": "United States"});
        remap_country_id(&mut country);
        assert_eq!(country["id"], "US");
    }
}
