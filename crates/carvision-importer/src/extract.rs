//! Ad Extractor: finds the list of listing objects inside an export document.

use serde_json::{Map, Value};

use crate::error::ImportError;

/// Envelope keys checked, in priority order, on an object-shaped document.
const ENVELOPE_KEYS: [&str; 4] = ["ads", "items", "results", "vehicles"];

/// JSON:API-style fallback envelope key.
const DATA_KEY: &str = "data";

/// Raw listing object of unknown shape.
pub type RawAd = Map<String, Value>;

/// Returns the listing objects contained in `document`, in source order.
///
/// Accepted shapes:
/// - a bare array of ads;
/// - an object with an array under `ads`, `items`, `results` or `vehicles`
///   (first match wins);
/// - an object with an array under `data`.
///
/// Non-object elements of the chosen array are dropped.
///
/// # Errors
///
/// Returns [`ImportError::UnrecognizedFormat`] when no array is found.
pub fn extract_ads(document: &Value) -> Result<Vec<&RawAd>, ImportError> {
    let array = locate_ads_array(document).ok_or(ImportError::UnrecognizedFormat)?;

    let ads: Vec<&RawAd> = array.iter().filter_map(Value::as_object).collect();
    let dropped = array.len() - ads.len();
    if dropped > 0 {
        tracing::warn!(dropped, "skipping non-object entries in ad list");
    }
    tracing::info!(count = ads.len(), "extracted ads");
    Ok(ads)
}

fn locate_ads_array(document: &Value) -> Option<&Vec<Value>> {
    match document {
        Value::Array(items) => Some(items),
        Value::Object(obj) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_array))
            .or_else(|| obj.get(DATA_KEY).and_then(Value::as_array)),
        _ => None,
    }
}
