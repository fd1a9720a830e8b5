//! Reusable field validators
//!
//! These are the building blocks of the dish and order validator chains.
//! Each one inspects a single field of the `data` payload and either returns
//! the extracted value or halts the request with a 400.

use serde_json::Value;

use crate::core::error::{ApiError, ApiResult};

/// Validator: field is a non-empty string
///
/// Absent, `null`, non-string and empty values all fail with `message`.
pub fn non_empty_string(payload: &Value, field: &str, message: &str) -> ApiResult<String> {
    match payload.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ApiError::validation(message)),
    }
}

/// Validator: value is a JSON integer greater than 0
///
/// Fractional numbers are rejected even when they are whole (`2.0`).
pub fn positive_integer(value: Option<&Value>) -> Option<u64> {
    value.and_then(Value::as_u64).filter(|n| *n > 0)
}

/// Consistency check between the body `id` and the route identifier
///
/// An absent, `null` or empty body id always passes. Numeric ids are
/// compared through their decimal form. On a mismatch, `mismatch` builds
/// the message from the body id and the route id.
pub fn id_matches(
    payload: &Value,
    route_id: &str,
    mismatch: impl FnOnce(&str, &str) -> String,
) -> ApiResult<()> {
    let body_id = match payload.get("id") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::String(s)) if s.is_empty() => return Ok(()),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    if body_id == route_id {
        Ok(())
    } else {
        Err(ApiError::conflict(mismatch(&body_id, route_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === non_empty_string() ===

    #[test]
    fn test_non_empty_string_returns_value() {
        let payload = json!({ "name": "Taco" });
        assert_eq!(
            non_empty_string(&payload, "name", "missing").unwrap(),
            "Taco"
        );
    }

    #[test]
    fn test_non_empty_string_missing_field() {
        let err = non_empty_string(&json!({}), "name", "Dish must include a name").unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a name");
    }

    #[test]
    fn test_non_empty_string_empty_value() {
        assert!(non_empty_string(&json!({ "name": "" }), "name", "missing").is_err());
    }

    #[test]
    fn test_non_empty_string_wrong_type() {
        assert!(non_empty_string(&json!({ "name": 42 }), "name", "missing").is_err());
        assert!(non_empty_string(&json!({ "name": null }), "name", "missing").is_err());
    }

    // === positive_integer() ===

    #[test]
    fn test_positive_integer_accepts_positive() {
        assert_eq!(positive_integer(Some(&json!(3))), Some(3));
    }

    #[test]
    fn test_positive_integer_rejects_zero_and_negative() {
        assert_eq!(positive_integer(Some(&json!(0))), None);
        assert_eq!(positive_integer(Some(&json!(-1))), None);
    }

    #[test]
    fn test_positive_integer_rejects_non_integers() {
        assert_eq!(positive_integer(Some(&json!(2.5))), None);
        assert_eq!(positive_integer(Some(&json!("2"))), None);
        assert_eq!(positive_integer(None), None);
    }

    // === id_matches() ===

    fn cite(body: &str, route: &str) -> String {
        format!("body {body}, route {route}")
    }

    #[test]
    fn test_id_matches_without_body_id() {
        assert!(id_matches(&json!({}), "5", cite).is_ok());
        assert!(id_matches(&json!({ "id": null }), "5", cite).is_ok());
        assert!(id_matches(&json!({ "id": "" }), "5", cite).is_ok());
    }

    #[test]
    fn test_id_matches_same_id() {
        assert!(id_matches(&json!({ "id": "5" }), "5", cite).is_ok());
        assert!(id_matches(&json!({ "id": 5 }), "5", cite).is_ok());
    }

    #[test]
    fn test_id_mismatch_cites_both_ids() {
        let err = id_matches(&json!({ "id": 9 }), "5", cite).unwrap_err();
        assert!(matches!(err, ApiError::Conflict { .. }));
        assert_eq!(err.to_string(), "body 9, route 5");
    }
}
