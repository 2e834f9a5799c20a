pub mod contacts;
pub mod relationships;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::Mutex;
use rusqlite::Connection;
use serde_json::json;
use tracing::error;

use crate::error::DirectoryError;

/// Shared handle to the directory database. rusqlite connections are not
/// Sync, so handlers serialize access through a mutex; the lock is never
/// held across an await.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/contacts", get(contacts::list).post(contacts::create))
        .route(
            "/contacts/{id}",
            get(contacts::get_by_id)
                .put(contacts::update)
                .delete(contacts::remove),
        )
        .route("/relationships", get(relationships::list_names))
        .route("/health", get(health))
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "OK"
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = match &self {
            DirectoryError::BlankField { .. } | DirectoryError::InvalidRelationship { .. } => {
                StatusCode::BAD_REQUEST
            }
            DirectoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            DirectoryError::Database(_) => {
                error!("storage failure: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
