//! Internal lookup primitives shared by [`crate::normalize`].
//!
//! Source exports differ in where they put a given field, so every output
//! field is resolved from an ordered list of candidate paths. A candidate
//! only counts when its value is "present": not null, not `false`, not a
//! numeric zero, and not an empty string, array or object.

use serde_json::{Map, Value};

/// A dotted location inside a raw ad, e.g. `&["vehicle", "power", "kw"]`.
pub(crate) type FieldPath = &'static [&'static str];

/// Follows `path` through nested objects. Returns `None` as soon as a
/// segment is missing or an intermediate value is not an object.
pub(crate) fn lookup<'a>(ad: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = ad.get(*first)?;
    for key in rest {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// Returns the first present value among `candidates`.
pub(crate) fn pick<'a>(ad: &'a Map<String, Value>, candidates: &[FieldPath]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|path| lookup(ad, path))
        .find(|value| is_present(value))
}

/// Like [`pick`], but clones the value for storage in the output record.
pub(crate) fn pick_owned(ad: &Map<String, Value>, candidates: &[FieldPath]) -> Option<Value> {
    pick(ad, candidates).cloned()
}

/// Like [`pick`], then renders the value as text (see [`value_as_string`]).
pub(crate) fn pick_string(ad: &Map<String, Value>, candidates: &[FieldPath]) -> Option<String> {
    pick(ad, candidates).and_then(value_as_string)
}

pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(obj) => !obj.is_empty(),
    }
}

/// Strings pass through; numbers use their JSON text. Anything else is `None`.
pub(crate) fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object fixture, got {other}"),
        }
    }

    #[test]
    fn lookup_follows_nested_objects() {
        let ad = obj(json!({"vehicle": {"power": {"kw": 110}}}));
        assert_eq!(lookup(&ad, &["vehicle", "power", "kw"]), Some(&json!(110)));
    }

    #[test]
    fn lookup_stops_at_non_object() {
        let ad = obj(json!({"vehicle": "Golf"}));
        assert!(lookup(&ad, &["vehicle", "make"]).is_none());
        assert!(lookup(&ad, &[]).is_none());
    }

    #[test]
    fn pick_skips_absent_and_empty_candidates() {
        let ad = obj(json!({"vehicle": {"title": ""}, "title": "Golf", "model": "Golf VII"}));
        let candidates: &[FieldPath] = &[
            &["vehicle", "modelDescription"],
            &["vehicle", "title"],
            &["title"],
            &["model"],
        ];
        assert_eq!(pick(&ad, candidates), Some(&json!("Golf")));
    }

    #[test]
    fn pick_skips_zero_and_null() {
        let ad = obj(json!({"price": {"consumerGross": 0, "amount": null}, "preis": 9000}));
        let candidates: &[FieldPath] = &[
            &["price", "consumerGross"],
            &["price", "amount"],
            &["price"],
            &["preis"],
        ];
        assert_eq!(
            pick(&ad, candidates),
            Some(&json!({"consumerGross": 0, "amount": null}))
        );
    }

    #[test]
    fn is_present_mirrors_truthiness() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!(false)));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(0.0)));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!([])));
        assert!(!is_present(&json!({})));
        assert!(is_present(&json!(true)));
        assert!(is_present(&json!(-1)));
        assert!(is_present(&json!(" ")));
        assert!(is_present(&json!([0])));
    }

    #[test]
    fn value_as_string_handles_numbers() {
        assert_eq!(value_as_string(&json!(42)), Some("42".to_owned()));
        assert_eq!(value_as_string(&json!("42")), Some("42".to_owned()));
        assert_eq!(value_as_string(&json!({"a": 1})), None);
        assert_eq!(value_as_string(&json!(true)), None);
    }
}
