//! The error document envelope and its inferred response status.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::object::JsonApiError;
use crate::status::infer_status;

/// A complete JSON:API error document plus the response status inferred
/// from its errors.
///
/// This is plain data: [`body`](Self::body) is the `{"errors": [...]}`
/// envelope and [`status`](Self::status) the HTTP status code, and the
/// transport layer is responsible for emitting them. With the `axum`
/// feature (default) the document also implements
/// [`axum::response::IntoResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct JsonApiErrorResponse {
    errors: Vec<JsonApiError>,
    #[serde(skip)]
    status: u16,
}

impl JsonApiErrorResponse {
    /// Wrap an ordered error document and infer its response status.
    pub fn new(errors: Vec<JsonApiError>) -> JsonApiErrorResponse {
        let statuses: Vec<Option<u16>> = errors.iter().map(JsonApiError::status).collect();
        let status = infer_status(&statuses);
        JsonApiErrorResponse { errors, status }
    }

    /// Single-error convenience over [`JsonApiError::from_map`].
    pub fn from_map(map: &Map<String, Value>) -> Result<JsonApiErrorResponse, ValidationError> {
        Ok(JsonApiErrorResponse::new(vec![JsonApiError::from_map(map)?]))
    }

    /// One error per map, in input order; fails on the first map without a
    /// recognized field.
    pub fn from_maps(maps: &[Map<String, Value>]) -> Result<JsonApiErrorResponse, ValidationError> {
        let errors = maps
            .iter()
            .map(JsonApiError::from_map)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(JsonApiErrorResponse::new(errors))
    }

    /// The inferred HTTP status code for the whole response.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The error document, in the order the errors were supplied.
    pub fn errors(&self) -> &[JsonApiError] {
        &self.errors
    }

    /// The `{"errors": [...]}` envelope handed to the transport layer,
    /// list order preserved.
    pub fn body(&self) -> Value {
        let errors = self
            .errors
            .iter()
            .map(|error| Value::Object(error.to_map()))
            .collect();
        let mut body = Map::new();
        body.insert("errors".to_owned(), Value::Array(errors));
        Value::Object(body)
    }
}

impl From<JsonApiError> for JsonApiErrorResponse {
    fn from(error: JsonApiError) -> JsonApiErrorResponse {
        JsonApiErrorResponse::new(vec![error])
    }
}

#[cfg(feature = "axum")]
mod adapter {
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };

    use super::JsonApiErrorResponse;

    impl IntoResponse for JsonApiErrorResponse {
        fn into_response(self) -> Response {
            let status =
                StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            tracing::debug!(
                status = status.as_u16(),
                errors = self.errors.len(),
                "emitting error document"
            );

            (status, Json(self.body())).into_response()
        }
    }
}
