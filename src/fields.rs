use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight members a JSON:API error object may carry.
///
/// The variant order is the canonical serialization order; the map filter in
/// [`JsonApiError::from_map`](crate::JsonApiError::from_map) and the
/// at-least-one-field check both iterate [`ErrorField::ALL`], so the
/// recognized key set and the validated field set cannot drift apart.
///
/// See <https://jsonapi.org/format/#error-objects>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum ErrorField {
    Id,
    Links,
    Status,
    Code,
    Source,
    Title,
    Detail,
    Meta,
}

impl ErrorField {
    /// All fields, in canonical serialization order.
    pub const ALL: [ErrorField; 8] = [
        ErrorField::Id,
        ErrorField::Links,
        ErrorField::Status,
        ErrorField::Code,
        ErrorField::Source,
        ErrorField::Title,
        ErrorField::Detail,
        ErrorField::Meta,
    ];

    /// The member name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Links => "links",
            Self::Status => "status",
            Self::Code => "code",
            Self::Source => "source",
            Self::Title => "title",
            Self::Detail => "detail",
            Self::Meta => "meta",
        }
    }

    /// Recognize a map key. Unknown keys yield `None` and are ignored by the
    /// map filter.
    pub fn from_key(key: &str) -> Option<ErrorField> {
        match key {
            "id" => Some(Self::Id),
            "links" => Some(Self::Links),
            "status" => Some(Self::Status),
            "code" => Some(Self::Code),
            "source" => Some(Self::Source),
            "title" => Some(Self::Title),
            "detail" => Some(Self::Detail),
            "meta" => Some(Self::Meta),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
