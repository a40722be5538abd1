use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::SharedState;

/// Cap on collection names reported by `/test`.
const MAX_COLLECTIONS: usize = 10;

/// Display cap on error strings embedded in the status.
const MAX_ERROR_LEN: usize = 50;

#[derive(Debug, Serialize)]
pub struct Diagnostics {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// Read-only health snapshot. Every failure path degrades to a descriptive
/// status string; this endpoint always answers 200.
pub async fn test_database(State(state): State<SharedState>) -> Json<Diagnostics> {
    let mut resp = Diagnostics {
        backend: "running",
        database: "unavailable".to_string(),
        database_url: presence(state.config.database_url.is_some()),
        database_name: presence(state.config.database_name.is_some()),
        connection_status: "not connected",
        collections: Vec::new(),
    };

    match &state.store {
        Some(store) => {
            resp.connection_status = "connected";
            match store.list_collections().await {
                Ok(mut names) => {
                    names.truncate(MAX_COLLECTIONS);
                    resp.collections = names;
                    resp.database = "connected".to_string();
                }
                Err(e) => {
                    resp.database = format!(
                        "connected but erroring: {}",
                        truncate(&e.to_string(), MAX_ERROR_LEN)
                    );
                }
            }
        }
        // Configured but the handle never came up at startup.
        None if state.config.database_url.is_some() => {
            resp.database = "available but not initialized".to_string();
        }
        None => {}
    }

    Json(resp)
}

fn presence(set: bool) -> &'static str {
    if set { "set" } else { "not set" }
}

/// Truncate to at most `max` bytes, backing up to the previous char boundary.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
