// handlers/admin/list_questions.rs - GET /api/admin/questions handler
use axum::extract::{Query, State};
use axum::Json;

use crate::database::models::Question;
use crate::error::ApiError;
use crate::AppState;

use super::{require_admin, AdminQuery};

/// List every question, in id order. The admin panel uses this to render
/// the table rows it selects for deletion.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<Vec<Question>>, ApiError> {
    require_admin(query.password.as_deref(), &state)?;

    let questions = state.store.list_all().await?;
    Ok(Json(questions))
}
