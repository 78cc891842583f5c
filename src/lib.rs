//! JSON:API error documents for HTTP APIs.
//!
//! Builds error objects per <https://jsonapi.org/format/#error-objects>,
//! collects them into the `{"errors": [...]}` envelope, and infers a single
//! response status code from the per-error statuses. The crate produces
//! plain data (a serializable body plus a status code) and leaves the
//! transport to the caller; with the default `axum` feature the document
//! also implements `axum::response::IntoResponse`.
//!
//! ```
//! use jsonapi_error::{JsonApiError, JsonApiErrorResponse};
//!
//! let error = JsonApiError::builder()
//!     .status(404)
//!     .code("not_found")
//!     .title("Card not found")
//!     .build()?;
//!
//! let response = JsonApiErrorResponse::from(error);
//! assert_eq!(response.status(), 404);
//! # Ok::<(), jsonapi_error::ValidationError>(())
//! ```

pub mod error;
pub mod fields;
pub mod object;
pub mod response;
pub mod status;

pub use error::ValidationError;
pub use fields::ErrorField;
pub use object::{ErrorLinks, ErrorSource, JsonApiError, JsonApiErrorBuilder};
pub use response::JsonApiErrorResponse;
pub use status::infer_status;
