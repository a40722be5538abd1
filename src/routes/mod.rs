pub mod contact;
pub mod diagnostics;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};
use serde_json::{Value, json};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(root))
        .route("/api/contact", post(contact::submit))
        .route("/test", get(diagnostics::test_database))
}

async fn root(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "message": "Portfolio API running",
        "owner": state.config.owner,
    }))
}
