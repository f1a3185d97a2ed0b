//! `X-Sharer-User-Id` extractor for Axum handlers.
//!
//! Every endpoint that acts as a specific user reads the caller's id from
//! this header. Whether that id names an existing user is checked per
//! handler (the answer differs: booking paths 404, comment paths 400).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lendit_core::error::CoreError;
use lendit_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the id of the user a request acts as.
pub const SHARER_USER_ID: &str = "x-sharer-user-id";

/// Caller identity extracted from the `X-Sharer-User-Id` header.
///
/// Use this as an extractor parameter in any handler that requires a caller:
///
/// ```ignore
/// async fn my_handler(SharerUserId(user_id): SharerUserId) -> AppResult<Json<()>> {
///     tracing::info!(user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SharerUserId(pub DbId);

impl FromRequestParts<AppState> for SharerUserId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(SHARER_USER_ID)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(
                    "X-Sharer-User-Id header is required".into(),
                ))
            })?;

        let user_id = raw.trim().parse::<DbId>().map_err(|_| {
            AppError::Core(CoreError::Validation(
                "X-Sharer-User-Id header must be an integer".into(),
            ))
        })?;

        Ok(SharerUserId(user_id))
    }
}
