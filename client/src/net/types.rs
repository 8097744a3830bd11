//! Wire DTOs for the admin role API.
//!
//! DESIGN
//! ======
//! The API wraps every resource in an `{ "object", "attributes" }` item and
//! collections in `{ "object": "list", "data": [...] }`. These envelopes stay
//! at the net boundary; the rest of the client only ever sees `Role`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A permission role as shown in the admin panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Backend-assigned identifier. Never changed by the client.
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One resource wrapped in the API item envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiItem<T> {
    pub object: String,
    pub attributes: T,
}

/// A collection wrapped in the API list envelope.
///
/// `data` may be omitted by the server for an empty collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiList<T> {
    pub object: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<ApiItem<T>>,
}

impl<T> ApiList<T> {
    /// Strip the envelopes, keeping server order.
    pub fn into_attributes(self) -> Vec<T> {
        self.data.into_iter().map(|item| item.attributes).collect()
    }
}

/// Request body for `POST /api/application/roles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
}

/// One entry of the API error body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Error body returned by the API on non-2xx responses.
///
/// Older endpoints send a bare `{ "error": "..." }` instead of `errors`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
    #[serde(default)]
    pub error: Option<String>,
}
