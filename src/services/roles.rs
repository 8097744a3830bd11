//! Admin role service: validation, listing and creation.
//!
//! DESIGN
//! ======
//! Roles are plain rows in `admin_roles`. Listing returns them ordered by id;
//! clients render that order as-is. Input is validated here rather than in the
//! route so every caller gets the same limits and messages.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use sqlx::PgPool;
use tracing::info;

pub const NAME_MAX_LEN: usize = 64;
pub const DESCRIPTION_MAX_LEN: usize = 255;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RoleError {
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from role queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Validated input for a new role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Trim and bounds-check create input. A blank description becomes `None`.
///
/// # Errors
///
/// Returns `RoleError::Validation` with a user-facing message.
pub fn validate_new_role(name: Option<&str>, description: Option<&str>) -> Result<NewRole, RoleError> {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(RoleError::Validation("The name field is required.".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(RoleError::Validation(format!(
            "The name may not be greater than {NAME_MAX_LEN} characters."
        )));
    }

    let description = description.map(str::trim).filter(|d| !d.is_empty());
    if description.is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_LEN) {
        return Err(RoleError::Validation(format!(
            "The description may not be greater than {DESCRIPTION_MAX_LEN} characters."
        )));
    }

    Ok(NewRole { name: name.to_owned(), description: description.map(str::to_owned) })
}

// =============================================================================
// QUERIES
// =============================================================================

/// List all roles, ordered by id.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_roles(pool: &PgPool) -> Result<Vec<RoleRow>, RoleError> {
    let rows = sqlx::query_as::<_, (i32, String, Option<String>)>(
        "SELECT id, name, description FROM admin_roles ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, description)| RoleRow { id, name, description })
        .collect())
}

/// Insert a validated role and return the stored row.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_role(pool: &PgPool, input: &NewRole) -> Result<RoleRow, RoleError> {
    let (id, name, description) = sqlx::query_as::<_, (i32, String, Option<String>)>(
        "INSERT INTO admin_roles (name, description) VALUES ($1, $2) RETURNING id, name, description",
    )
    .bind(&input.name)
    .bind(input.description.as_deref())
    .fetch_one(pool)
    .await?;

    info!(role_id = id, %name, "admin role created");
    Ok(RoleRow { id, name, description })
}
