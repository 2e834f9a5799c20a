//! Relationship handlers

use axum::extract::State;
use axum::Json;

use crate::error::DirectoryResult;
use crate::http::AppState;
use crate::ops::relationship_ops;

/// GET /relationships
pub async fn list_names(State(state): State<AppState>) -> DirectoryResult<Json<Vec<String>>> {
    let conn = state.db.lock();
    let names = relationship_ops::relationship_names(&conn)?;
    Ok(Json(names))
}
