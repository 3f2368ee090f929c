// handlers/admin/add_questions.rs - POST /api/admin/add-questions handler
use axum::extract::{Query, State};
use axum::Json;

use crate::database::models::Question;
use crate::error::ApiError;
use crate::AppState;

use super::{require_admin, AdminQuery};

/// Add a batch of already-structured questions.
///
/// Only the password is validated; an empty array is accepted and is a
/// no-op insert. The response does not distinguish the two cases.
pub async fn add_questions(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
    Json(questions): Json<Vec<Question>>,
) -> Result<&'static str, ApiError> {
    require_admin(query.password.as_deref(), &state)?;

    state.store.insert_all(questions).await?;

    Ok("Questions added successfully!")
}
