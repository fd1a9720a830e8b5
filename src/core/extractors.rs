//! Axum extractors and response envelopes
//!
//! Request and response bodies share one shape: `{ "data": <payload> }`.
//! [`DataEnvelope`] unwraps incoming bodies, [`Envelope`] wraps outgoing ones.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::error::ApiError;

/// Extractor for the `data` member of a JSON request body
///
/// A body without `data` (or with `data: null`) yields an empty object, so the
/// field validators report the first missing field instead of a parse error.
/// Malformed JSON is rejected with a 400.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(
///     State(state): State<AppState>,
///     DataEnvelope(payload): DataEnvelope,
/// ) -> ApiResult<(StatusCode, Json<Envelope<Dish>>)> {
///     let draft = DishDraft::validate(&payload)?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DataEnvelope(pub Value);

impl DataEnvelope {
    /// Unwrap a full request body into its `data` payload
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut obj) => match obj.remove("data") {
                Some(Value::Null) | None => Self::empty(),
                Some(data) => Self(data),
            },
            _ => Self::empty(),
        }
    }

    fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Get the inner payload
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl<S> FromRequest<S> for DataEnvelope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|e| ApiError::validation(format!("Invalid JSON: {}", e.body_text())))?;

        Ok(Self::from_body(body))
    }
}

/// Response body wrapper: `{ "data": ... }`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
