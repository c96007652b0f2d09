//! Serde helpers for values that arrive as query-string text.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOr<T> {
    Native(T),
    Text(String),
}

/// Deserialize an optional value given either natively or as a string.
///
/// Query parameters reach the filter schema as strings (`?min_price=1000`);
/// this accepts both `1000` and `"1000"`. An empty string is treated as absent.
pub fn opt_from_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
{
    match Option::<TextOr<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(TextOr::Native(value)) => Ok(Some(value)),
        Some(TextOr::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(TextOr::Text(text)) => text.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct PriceFilter {
        #[serde(default, deserialize_with = "opt_from_str")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "opt_from_str")]
        active: Option<bool>,
    }

    #[test]
    fn test_accepts_text_and_native() {
        let filter: PriceFilter =
            serde_json::from_value(serde_json::json!({"price": "12.5", "active": true})).unwrap();
        assert_eq!(filter.price, Some(12.5));
        assert_eq!(filter.active, Some(true));
    }

    #[test]
    fn test_empty_and_missing_are_none() {
        let filter: PriceFilter = serde_json::from_value(serde_json::json!({"price": ""})).unwrap();
        assert_eq!(filter.price, None);
        assert_eq!(filter.active, None);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result: Result<PriceFilter, _> =
            serde_json::from_value(serde_json::json!({"price": "cheap"}));
        assert!(result.is_err());
    }
}
