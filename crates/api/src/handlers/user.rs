//! Handlers for the user directory.
//!
//! A missing user is 404 on fetch but 400 on update and delete; the
//! asymmetry is deliberate.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use lendit_core::error::CoreError;
use lendit_core::types::DbId;
use lendit_db::models::user::{CreateUser, UpdateUser, User};
use lendit_db::repositories::UserRepo;
use validator::Validate;

use crate::error::{validation_message, AppResult};
use crate::state::AppState;

/// POST /users
///
/// Create a user. A duplicate email trips the unique constraint and maps
/// to 409.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<Json<User>> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(validation_message(&e)))?;

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, "User created");
    Ok(Json(user))
}

/// PATCH /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(validation_message(&e)))?;

    let updated = UserRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or_else(|| {
            CoreError::Validation(format!("User with id {user_id} not found"))
        })?;

    tracing::info!(user_id, "User updated");
    Ok(Json(updated))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })?;
    Ok(Json(user))
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, user_id).await?;
    if !deleted {
        return Err(CoreError::Validation(format!("User with id {user_id} not found")).into());
    }
    tracing::info!(user_id, "User deleted");
    Ok(StatusCode::OK)
}
