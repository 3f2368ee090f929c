// handlers/admin/mod.rs - password-gated question administration
mod add_questions;
mod delete_questions;
mod list_questions;
mod upload;

pub use add_questions::add_questions;
pub use delete_questions::delete_questions;
pub use list_questions::list_questions;
pub use upload::upload_csv;

use serde::Deserialize;

use crate::auth;
use crate::error::ApiError;
use crate::AppState;

/// Query parameters shared by the admin endpoints.
#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub password: Option<String>,
    pub ids: Option<String>,
}

/// Every admin operation starts with this gate; nothing else authorizes.
fn require_admin(password: Option<&str>, state: &AppState) -> Result<(), ApiError> {
    if auth::is_admin(password, &state.admin_password) {
        Ok(())
    } else {
        Err(ApiError::forbidden(
            "Unauthorized access. Invalid admin password.",
        ))
    }
}
