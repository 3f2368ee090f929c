// handlers/admin/delete_questions.rs - DELETE /api/admin/delete-questions handler
use axum::extract::{Query, State};

use crate::error::ApiError;
use crate::AppState;

use super::{require_admin, DeleteQuery};

/// Delete questions by id.
///
/// Ids arrive as a comma-separated query parameter (`ids=1,2,3`). Unknown
/// ids are ignored by storage; duplicates pass through unchanged.
pub async fn delete_questions(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<&'static str, ApiError> {
    require_admin(query.password.as_deref(), &state)?;

    let ids = parse_ids(query.ids.as_deref())?;
    if ids.is_empty() {
        return Err(ApiError::bad_request("No question IDs provided."));
    }

    state.store.delete_by_ids(&ids).await?;

    Ok("Questions deleted successfully!")
}

fn parse_ids(raw: Option<&str>) -> Result<Vec<i64>, ApiError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| ApiError::bad_request(format!("Invalid question id: {}", s)))
        })
        .collect()
}
