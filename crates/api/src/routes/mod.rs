//! Route handlers and the request plumbing they share.

pub mod articles;
pub mod content;

use axum::body::Bytes;
use axum::extract::{FromRequest, Query, Request};
use axum::http::StatusCode;
use serde::Serialize;
use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S> {
    pub store: S,
}

impl<S> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Acknowledgement returned by the save routes.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// A decoded JSON object body.
pub type JsonObject = Map<String, Value>;

/// JSON request body, parsed whatever the `Content-Type` header says.
///
/// The body must be a JSON object; duplicate keys keep the last value.
/// Unlike `axum::Json`, a failure is an [`ApiError`] rather than a 4xx
/// rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: TryFrom<JsonObject, Error = ApiError>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Object(object) => Ok(Self(T::try_from(object)?)),
            _ => Err(malformed("expected a JSON object body")),
        }
    }
}

fn malformed(msg: impl std::fmt::Display) -> ApiError {
    ApiError::MalformedBody(serde_json::Error::custom(msg))
}

/// Takes a field from a body as text.
///
/// Absent and `null` fields are `None`. Numbers and booleans are kept as
/// their JSON text. Arrays and objects cannot be bound to a column.
pub(crate) fn text_field(
    object: &mut JsonObject,
    key: &str,
) -> Result<Option<String>, ApiError> {
    match object.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Array(_) | Value::Object(_)) => {
            Err(malformed(format!("field `{key}` must be a scalar")))
        }
    }
}

/// Raw query-string pairs in request order.
///
/// Lookups return the first value for a key, so repeated parameters never
/// fail the request.
pub type QueryPairs = Query<Vec<(String, String)>>;

pub(crate) fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Fallback for unknown paths and for known paths hit with the wrong method.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
