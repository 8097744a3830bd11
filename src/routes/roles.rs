//! Admin role API routes.
//!
//! Responses wrap each role as `{ "object": "admin_role", "attributes": {..} }`
//! and lists as `{ "object": "list", "data": [..] }`. Every failure carries an
//! `{ "errors": [{ "code", "status", "detail" }] }` body.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::roles::{self, RoleError, RoleRow};
use crate::state::AppState;

const ROLE_OBJECT: &str = "admin_role";
const LIST_OBJECT: &str = "list";

#[derive(Debug, Serialize)]
pub struct RoleAttributes {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiItem<T> {
    pub object: &'static str,
    pub attributes: T,
}

#[derive(Debug, Serialize)]
pub struct ApiList<T> {
    pub object: &'static str,
    pub data: Vec<ApiItem<T>>,
}

fn role_item(row: RoleRow) -> ApiItem<RoleAttributes> {
    ApiItem {
        object: ROLE_OBJECT,
        attributes: RoleAttributes { id: row.id, name: row.name, description: row.description },
    }
}

fn role_list(rows: Vec<RoleRow>) -> ApiList<RoleAttributes> {
    ApiList { object: LIST_OBJECT, data: rows.into_iter().map(role_item).collect() }
}

#[derive(Debug, Deserialize)]
pub struct CreateRoleBody {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Error response in the API's `errors` envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub detail: String,
}

impl ApiError {
    fn body(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": [{
                "code": self.code,
                "status": self.status.as_u16().to_string(),
                "detail": self.detail,
            }]
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}

pub(crate) fn role_error_to_response(err: RoleError) -> ApiError {
    match err {
        RoleError::Validation(detail) => {
            ApiError { status: StatusCode::UNPROCESSABLE_ENTITY, code: "ValidationException", detail }
        }
        RoleError::Database(e) => {
            tracing::error!(error = %e, "admin role query failed");
            ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "HttpException",
                detail: "Server Error".to_owned(),
            }
        }
    }
}

/// Keeps axum's status for the rejection (400 syntax, 415 content type,
/// 422 shape) and names the error code after it.
fn json_rejection_to_response(rejection: JsonRejection) -> ApiError {
    let status = rejection.status();
    let code = match status {
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UnsupportedMediaTypeHttpException",
        StatusCode::UNPROCESSABLE_ENTITY => "UnprocessableEntityHttpException",
        _ => "BadRequestHttpException",
    };
    ApiError { status, code, detail: rejection.body_text() }
}

/// `GET /api/application/roles`: list all roles.
pub async fn list_roles(State(state): State<AppState>) -> Result<Json<ApiList<RoleAttributes>>, ApiError> {
    let rows = roles::list_roles(&state.pool)
        .await
        .map_err(role_error_to_response)?;
    Ok(Json(role_list(rows)))
}

/// `POST /api/application/roles`: create a role.
pub async fn create_role(
    State(state): State<AppState>,
    payload: Result<Json<CreateRoleBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiItem<RoleAttributes>>), ApiError> {
    let Json(body) = payload.map_err(json_rejection_to_response)?;
    let input = roles::validate_new_role(body.name.as_deref(), body.description.as_deref())
        .map_err(role_error_to_response)?;
    let row = roles::create_role(&state.pool, &input)
        .await
        .map_err(role_error_to_response)?;
    Ok((StatusCode::CREATED, Json(role_item(row))))
}
