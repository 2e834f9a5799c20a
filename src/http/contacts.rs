//! Contact handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::DirectoryResult;
use crate::http::AppState;
use crate::model::{Contact, ContactDraft, Id};
use crate::ops::contact_ops;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub relationship: Option<String>,
}

/// GET /contacts
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> DirectoryResult<Json<Vec<Contact>>> {
    // Browsers submit blank filter boxes as empty strings; treat them as
    // absent rather than matching nothing.
    let search = query.search.as_deref().filter(|s| !s.is_empty());
    let relationship = query.relationship.as_deref().filter(|s| !s.is_empty());

    let conn = state.db.lock();
    let contacts = contact_ops::list_contacts(&conn, search, relationship)?;
    Ok(Json(contacts))
}

/// GET /contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> DirectoryResult<Json<Contact>> {
    let conn = state.db.lock();
    let contact = contact_ops::get_contact(&conn, Id::new(id))?;
    Ok(Json(contact))
}

/// POST /contacts
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ContactDraft>,
) -> DirectoryResult<(StatusCode, Json<Contact>)> {
    let mut conn = state.db.lock();
    let contact = contact_ops::create_contact(&mut conn, &draft)?;
    info!(id = contact.id.value, "created contact");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /contacts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<ContactDraft>,
) -> DirectoryResult<Json<Contact>> {
    let mut conn = state.db.lock();
    let contact = contact_ops::update_contact(&mut conn, Id::new(id), &draft)?;
    info!(id = contact.id.value, "updated contact");
    Ok(Json(contact))
}

/// DELETE /contacts/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> DirectoryResult<Json<Value>> {
    let conn = state.db.lock();
    let success = contact_ops::delete_contact(&conn, Id::new(id))?;
    info!(id, "deleted contact");
    Ok(Json(json!({ "success": success })))
}
