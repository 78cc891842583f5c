//! The JSON:API error object and its validated constructors.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::fields::ErrorField;

/// The `links` member of an error object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ErrorLinks {
    /// A link leading to further details about this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

/// The `source` member of an error object, referencing what caused the error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ErrorSource {
    /// JSON Pointer (RFC 6901) into the request document,
    /// e.g. `/data/attributes/title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    /// Name of the query parameter that caused the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl ErrorLinks {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(about) = &self.about {
            map.insert("about".to_owned(), Value::String(about.clone()));
        }
        Value::Object(map)
    }
}

impl ErrorSource {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(pointer) = &self.pointer {
            map.insert("pointer".to_owned(), Value::String(pointer.clone()));
        }
        if let Some(parameter) = &self.parameter {
            map.insert("parameter".to_owned(), Value::String(parameter.clone()));
        }
        Value::Object(map)
    }
}

/// A single JSON:API error object.
///
/// Immutable once built, and at least one member is always present: the
/// constructors reject an all-absent object with
/// [`ValidationError::NoFields`]. Members serialize in the canonical order
/// `id, links, status, code, source, title, detail, meta`; absent members
/// are omitted, never emitted as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct JsonApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<ErrorLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<ErrorSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    meta: Option<Map<String, Value>>,
}

impl JsonApiError {
    /// Start building an error with named-field setters.
    pub fn builder() -> JsonApiErrorBuilder {
        JsonApiErrorBuilder::default()
    }

    /// Build an error from an untyped string-keyed map.
    ///
    /// Only the eight recognized member names are read; unrecognized keys
    /// are silently dropped by design, and an explicit JSON `null` under a
    /// recognized key counts as absent. Fails with
    /// [`ValidationError::NoFields`] when no recognized field remains, or
    /// with [`ValidationError::InvalidField`] when a recognized key holds a
    /// value of the wrong shape.
    pub fn from_map(map: &Map<String, Value>) -> Result<JsonApiError, ValidationError> {
        let mut builder = JsonApiError::builder();
        for field in ErrorField::ALL {
            let Some(value) = map.get(field.as_str()) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            builder = builder.set_field(field, value)?;
        }
        builder.build()
    }

    /// The wire representation: present members only, in canonical order.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(id) = &self.id {
            map.insert(ErrorField::Id.to_string(), Value::String(id.clone()));
        }
        if let Some(links) = &self.links {
            map.insert(ErrorField::Links.to_string(), links.to_value());
        }
        if let Some(status) = self.status {
            map.insert(ErrorField::Status.to_string(), Value::from(status));
        }
        if let Some(code) = &self.code {
            map.insert(ErrorField::Code.to_string(), Value::String(code.clone()));
        }
        if let Some(source) = &self.source {
            map.insert(ErrorField::Source.to_string(), source.to_value());
        }
        if let Some(title) = &self.title {
            map.insert(ErrorField::Title.to_string(), Value::String(title.clone()));
        }
        if let Some(detail) = &self.detail {
            map.insert(ErrorField::Detail.to_string(), Value::String(detail.clone()));
        }
        if let Some(meta) = &self.meta {
            map.insert(ErrorField::Meta.to_string(), Value::Object(meta.clone()));
        }
        map
    }

    /// HTTP status code applicable to this specific error.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Unique identifier for this occurrence.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Links object for this error.
    pub fn links(&self) -> Option<&ErrorLinks> {
        self.links.as_ref()
    }

    /// Application-specific error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Reference to the source of the error.
    pub fn source(&self) -> Option<&ErrorSource> {
        self.source.as_ref()
    }

    /// Short, stable summary of the problem.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Explanation specific to this occurrence.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Non-standard metadata about the error.
    pub fn meta(&self) -> Option<&Map<String, Value>> {
        self.meta.as_ref()
    }
}

/// Builder for [`JsonApiError`].
///
/// Every setter is optional; [`build`](Self::build) enforces that at least
/// one field was supplied. Presence means "a value was set", so `status(0)`
/// and `title("")` count as present.
#[derive(Debug, Clone, Default)]
pub struct JsonApiErrorBuilder {
    id: Option<String>,
    links: Option<ErrorLinks>,
    status: Option<u16>,
    code: Option<String>,
    source: Option<ErrorSource>,
    title: Option<String>,
    detail: Option<String>,
    meta: Option<Map<String, Value>>,
}

impl JsonApiErrorBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn links(mut self, links: ErrorLinks) -> Self {
        self.links = Some(links);
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn source(mut self, source: ErrorSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn meta(mut self, meta: Map<String, Value>) -> Self {
        self.meta = Some(meta);
        self
    }

    fn set_field(self, field: ErrorField, value: &Value) -> Result<Self, ValidationError> {
        fn typed<T: DeserializeOwned>(
            field: ErrorField,
            value: &Value,
        ) -> Result<T, ValidationError> {
            serde_json::from_value(value.clone())
                .map_err(|source| ValidationError::InvalidField { field, source })
        }

        Ok(match field {
            ErrorField::Id => self.id(typed::<String>(field, value)?),
            ErrorField::Links => self.links(typed::<ErrorLinks>(field, value)?),
            ErrorField::Status => self.status(typed::<u16>(field, value)?),
            ErrorField::Code => self.code(typed::<String>(field, value)?),
            ErrorField::Source => self.source(typed::<ErrorSource>(field, value)?),
            ErrorField::Title => self.title(typed::<String>(field, value)?),
            ErrorField::Detail => self.detail(typed::<String>(field, value)?),
            ErrorField::Meta => self.meta(typed::<Map<String, Value>>(field, value)?),
        })
    }

    /// Finish the build, rejecting an all-absent error.
    pub fn build(self) -> Result<JsonApiError, ValidationError> {
        let any_set = self.id.is_some()
            || self.links.is_some()
            || self.status.is_some()
            || self.code.is_some()
            || self.source.is_some()
            || self.title.is_some()
            || self.detail.is_some()
            || self.meta.is_some();
        if !any_set {
            return Err(ValidationError::NoFields);
        }

        Ok(JsonApiError {
            id: self.id,
            links: self.links,
            status: self.status,
            code: self.code,
            source: self.source,
            title: self.title,
            detail: self.detail,
            meta: self.meta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_builder_with_single_field() {
        let error = JsonApiError::builder().status(400).build().unwrap();
        assert_eq!(error.status(), Some(400));
        assert_eq!(error.title(), None);
    }

    #[test]
    fn test_builder_without_fields_fails() {
        let result = JsonApiError::builder().build();
        assert!(matches!(result, Err(ValidationError::NoFields)));
    }

    #[test]
    fn test_builder_with_all_fields() {
        let error = JsonApiError::builder()
            .status(400)
            .id("1")
            .links(ErrorLinks {
                about: Some("http://example.com".to_owned()),
            })
            .code("400")
            .source(ErrorSource {
                pointer: Some("/data/attributes/first-name".to_owned()),
                parameter: None,
            })
            .title("Some title")
            .detail("Some detail")
            .meta(as_map(json!({"foo": "bar"})))
            .build()
            .unwrap();

        assert_eq!(error.status(), Some(400));
        assert_eq!(error.id(), Some("1"));
        assert_eq!(
            error.links().and_then(|l| l.about.as_deref()),
            Some("http://example.com")
        );
        assert_eq!(error.code(), Some("400"));
        assert_eq!(
            error.source().and_then(|s| s.pointer.as_deref()),
            Some("/data/attributes/first-name")
        );
        assert_eq!(error.title(), Some("Some title"));
        assert_eq!(error.detail(), Some("Some detail"));
        assert_eq!(error.meta(), Some(&as_map(json!({"foo": "bar"}))));
    }

    #[test]
    fn test_zero_and_empty_values_count_as_present() {
        // Presence means "a value was supplied", not "the value is truthy".
        let error = JsonApiError::builder().status(0).build().unwrap();
        assert_eq!(error.status(), Some(0));

        let error = JsonApiError::builder().title("").build().unwrap();
        assert_eq!(error.title(), Some(""));
    }

    #[test]
    fn test_from_map_with_recognized_fields() {
        let map = as_map(json!({"status": 400, "code": "test", "title": "Test"}));
        let error = JsonApiError::from_map(&map).unwrap();
        assert_eq!(error.status(), Some(400));
        assert_eq!(error.code(), Some("test"));
        assert_eq!(error.title(), Some("Test"));
    }

    #[test]
    fn test_from_map_empty_fails() {
        let result = JsonApiError::from_map(&Map::new());
        assert!(matches!(result, Err(ValidationError::NoFields)));
    }

    #[test]
    fn test_from_map_ignores_unrecognized_keys() {
        let map = as_map(json!({"status": 400, "bogus": "x"}));
        let error = JsonApiError::from_map(&map).unwrap();
        assert_eq!(error.status(), Some(400));
        assert_eq!(error.to_map(), as_map(json!({"status": 400})));
    }

    #[test]
    fn test_from_map_with_only_unrecognized_keys_fails() {
        let map = as_map(json!({"bogus": "x", "other": 1}));
        let result = JsonApiError::from_map(&map);
        assert!(matches!(result, Err(ValidationError::NoFields)));
    }

    #[test]
    fn test_from_map_null_value_counts_as_absent() {
        let map = as_map(json!({"status": null}));
        let result = JsonApiError::from_map(&map);
        assert!(matches!(result, Err(ValidationError::NoFields)));

        let map = as_map(json!({"status": null, "title": "Test"}));
        let error = JsonApiError::from_map(&map).unwrap();
        assert_eq!(error.status(), None);
        assert_eq!(error.title(), Some("Test"));
    }

    #[test]
    fn test_from_map_rejects_wrong_shape() {
        let map = as_map(json!({"status": "not a number"}));
        let result = JsonApiError::from_map(&map);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidField {
                field: ErrorField::Status,
                ..
            })
        ));

        let map = as_map(json!({"links": [1, 2]}));
        let result = JsonApiError::from_map(&map);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidField {
                field: ErrorField::Links,
                ..
            })
        ));
    }

    #[test]
    fn test_to_map_round_trips_from_map() {
        let input = as_map(json!({
            "status": 400,
            "id": "1",
            "links": {"about": "http://example.com"},
            "code": "400",
            "source": {"pointer": "/data/attributes/first-name"},
            "title": "Some title",
            "detail": "Some detail",
            "meta": {"foo": "bar"}
        }));
        let error = JsonApiError::from_map(&input).unwrap();
        assert_eq!(error.to_map(), input);
    }

    #[test]
    fn test_to_map_canonical_order() {
        // Supplied out of order; the wire form is still id, status, title.
        let error = JsonApiError::builder()
            .title("Not Found")
            .status(404)
            .id("42")
            .build()
            .unwrap();
        let wire = serde_json::to_string(&Value::Object(error.to_map())).unwrap();
        assert_eq!(wire, r#"{"id":"42","status":404,"title":"Not Found"}"#);
    }

    #[test]
    fn test_serialize_matches_to_map() {
        let error = JsonApiError::builder()
            .status(404)
            .code("not_found")
            .build()
            .unwrap();
        let direct = serde_json::to_string(&error).unwrap();
        let via_map = serde_json::to_string(&Value::Object(error.to_map())).unwrap();
        assert_eq!(direct, via_map);
    }
}
