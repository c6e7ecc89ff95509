//! Codec for the image URL list, stored as a JSON array in a single text column.
//!
//! Writes never fail: a list that cannot be encoded is logged and stored as `[]`.
//! Reads pick a [`DecodePolicy`]. A single-product read is strict so a corrupt
//! row surfaces as an error, while a catalog listing is lenient so one corrupt
//! row does not hide the rest.

use tracing::warn;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};

/// Stored form of an empty list
pub const EMPTY: &str = "[]";

/// How to treat a stored value that is not a JSON array of strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Fail with [`ProductError::MalformedImageUrls`]
    Strict,
    /// Log and fall back to an empty list
    Lenient,
}

/// Encode `urls` for storage, falling back to `[]`
pub fn encode(urls: &[String]) -> String {
    match serde_json::to_string(urls) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, count = urls.len(), "Failed to encode image urls, storing an empty list");
            EMPTY.to_string()
        }
    }
}

/// Parse a stored value. `null`, empty and blank text decode to an empty list.
pub fn decode(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let urls: Option<Vec<String>> = serde_json::from_str(raw)?;
    Ok(urls.unwrap_or_default())
}

/// Decode the stored value of product `id` under `policy`
pub fn decode_with(id: Uuid, raw: &str, policy: DecodePolicy) -> ProductResult<Vec<String>> {
    match (decode(raw), policy) {
        (Ok(urls), _) => Ok(urls),
        (Err(e), DecodePolicy::Strict) => Err(ProductError::MalformedImageUrls {
            id,
            reason: e.to_string(),
        }),
        (Err(e), DecodePolicy::Lenient) => {
            warn!(product_id = %id, error = %e, "Malformed image urls, returning an empty list");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&urls(&["a.png", "b.png"])), r#"["a.png","b.png"]"#);
        assert_eq!(encode(&[]), EMPTY);
    }

    #[test]
    fn test_decode_preserves_order() {
        let stored = encode(&urls(&["c.png", "a.png", "b.png"]));
        assert_eq!(decode(&stored).unwrap(), urls(&["c.png", "a.png", "b.png"]));
    }

    #[test]
    fn test_decode_empty_forms() {
        for raw in ["[]", "null", "", "   "] {
            assert!(decode(raw).unwrap().is_empty(), "{raw:?} should decode to an empty list");
        }
    }

    #[test]
    fn test_decode_rejects_non_arrays() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"url":"a.png"}"#).is_err());
        assert!(decode("[1,2]").is_err());
    }

    #[test]
    fn test_decode_with_strict() {
        let id = Uuid::now_v7();

        assert_eq!(
            decode_with(id, r#"["a.png"]"#, DecodePolicy::Strict).unwrap(),
            urls(&["a.png"])
        );

        let err = decode_with(id, "[\"a.png\"", DecodePolicy::Strict).unwrap_err();
        assert!(matches!(err, ProductError::MalformedImageUrls { id: err_id, .. } if err_id == id));
    }

    #[test]
    fn test_decode_with_lenient() {
        let urls = decode_with(Uuid::now_v7(), "{broken", DecodePolicy::Lenient).unwrap();
        assert!(urls.is_empty());
    }
}
