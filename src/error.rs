use crate::fields::ErrorField;

/// Failure to construct a [`JsonApiError`](crate::JsonApiError).
///
/// Not recoverable inside the library; reporting "no error" is a programming
/// mistake in the caller and must propagate.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// None of the recognized error fields were supplied.
    #[error(
        "error must have at least one of the following fields: \
         id, links, status, code, source, title, detail, meta"
    )]
    NoFields,

    /// A recognized field held a value of the wrong shape.
    #[error("invalid value for error field `{field}`: {source}")]
    InvalidField {
        field: ErrorField,
        #[source]
        source: serde_json::Error,
    },
}
