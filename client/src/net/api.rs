//! REST API helpers for the admin role endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::HttpError;
use super::types::{NewRole, Role};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ApiItem, ApiList};

const ROLES_ENDPOINT: &str = "/api/application/roles";

#[cfg(any(test, feature = "hydrate"))]
fn decode_role_list(raw: &str) -> Result<Vec<Role>, HttpError> {
    let list: ApiList<Role> =
        serde_json::from_str(raw).map_err(|e| HttpError::Decode(e.to_string()))?;
    Ok(list.into_attributes())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_role_item(raw: &str) -> Result<Role, HttpError> {
    let item: ApiItem<Role> =
        serde_json::from_str(raw).map_err(|e| HttpError::Decode(e.to_string()))?;
    Ok(item.attributes)
}

/// Build the create payload, turning a blank description into `null`.
fn new_role_body(name: &str, description: &str) -> NewRole {
    let description = description.trim();
    NewRole {
        name: name.trim().to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
    }
}

#[cfg(feature = "hydrate")]
async fn read_failure(resp: gloo_net::http::Response) -> HttpError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    super::http::status_error(status, body)
}

/// Fetch every role from `GET /api/application/roles`, in server order.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a role list.
pub async fn fetch_roles() -> Result<Vec<Role>, HttpError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ROLES_ENDPOINT)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(read_failure(resp).await);
        }
        let raw = resp.text().await.map_err(|e| HttpError::Decode(e.to_string()))?;
        decode_role_list(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ROLES_ENDPOINT;
        Err(HttpError::Network("not available on server".to_owned()))
    }
}

/// Create a role via `POST /api/application/roles`.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the input
/// (the body then carries the validation detail), or the body is not a role.
pub async fn create_role(name: &str, description: &str) -> Result<Role, HttpError> {
    let payload = new_role_body(name, description);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ROLES_ENDPOINT)
            .header("Accept", "application/json")
            .json(&payload)
            .map_err(|e| HttpError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(read_failure(resp).await);
        }
        let raw = resp.text().await.map_err(|e| HttpError::Decode(e.to_string()))?;
        decode_role_item(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(HttpError::Network("not available on server".to_owned()))
    }
}
