use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod import;

use database::store::QuestionStore;

/// Immutable per-process state: the storage collaborator and the admin
/// secret, injected at startup and passed explicitly to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuestionStore>,
    pub admin_password: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>, admin_password: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            admin_password: admin_password.into(),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Admin operations (shared-secret gated in each handler)
        .merge(admin_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn admin_routes() -> Router<AppState> {
    use axum::routing::{delete, post};
    use handlers::admin;

    Router::new()
        .route("/api/admin/upload", post(admin::upload_csv))
        .route("/api/admin/add-questions", post(admin::add_questions))
        .route("/api/admin/delete-questions", delete(admin::delete_questions))
        .route("/api/admin/questions", get(admin::list_questions))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "PrepX Admin API",
            "version": version,
            "description": "Question-bank administration: CSV import, bulk add, bulk delete",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "upload": "POST /api/admin/upload (password)",
                "add_questions": "POST /api/admin/add-questions (password)",
                "delete_questions": "DELETE /api/admin/delete-questions (password)",
                "questions": "GET /api/admin/questions (password)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "storage": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "storage unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "storage_error": e.to_string()
                }
            })),
        ),
    }
}
