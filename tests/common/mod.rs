use std::sync::Arc;

use prepx_admin_api::database::models::Question;
use prepx_admin_api::database::store::MemoryQuestionStore;
use prepx_admin_api::{app, AppState};

pub const ADMIN_PASSWORD: &str = "sesame";

pub struct TestApp {
    pub base_url: String,
    pub store: Arc<MemoryQuestionStore>,
}

/// Serve the app on an ephemeral port with an in-memory store. Each test
/// gets its own server and store, so there is no cross-test state.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryQuestionStore::new());
    let state = AppState::new(store.clone(), ADMIN_PASSWORD);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener has no local addr");

    let app = app(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    TestApp {
        base_url: format!("http://{}", addr),
        store,
    }
}

#[allow(dead_code)]
pub fn sample_question(text: &str) -> Question {
    Question {
        id: None,
        question_text: text.to_string(),
        option_a: "Paris".to_string(),
        option_b: "Rome".to_string(),
        option_c: "Berlin".to_string(),
        option_d: "Madrid".to_string(),
        correct_answer: "A".to_string(),
        category: "geography".to_string(),
        difficulty: Some("easy".to_string()),
    }
}
