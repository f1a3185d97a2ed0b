//! Shared query parameter types for API handlers.

use lendit_core::error::CoreError;
use lendit_core::pagination::{page_from_bounds, Page};
use serde::Deserialize;

use crate::error::AppResult;

/// Query parameters for the booking listing endpoints
/// (`?state=&from=&size=`).
#[derive(Debug, Deserialize)]
pub struct BookingListParams {
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

/// Generic `(from, size)` pagination parameters.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub from: Option<i64>,
    pub size: Option<i64>,
}

/// Query parameters for the item search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub text: String,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

/// Query parameter for the owner's booking decision.
#[derive(Debug, Deserialize)]
pub struct ApprovedParam {
    pub approved: bool,
}

/// Resolve optional `(from, size)` parameters into a page window.
///
/// No `from` means the unpaginated variant of the listing. When `from` is
/// present, `size` must be too, and the bounds rule applies.
pub fn optional_page(from: Option<i64>, size: Option<i64>) -> AppResult<Option<Page>> {
    let Some(from) = from else {
        return Ok(None);
    };
    let size = size.ok_or_else(|| {
        CoreError::Validation("size must be provided together with from".to_string())
    })?;
    let page = page_from_bounds(from, size).map_err(CoreError::Validation)?;
    Ok(Some(page))
}
