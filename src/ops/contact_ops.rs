use rusqlite::Connection;

use crate::db::{contact_repo, relationship_repo};
use crate::error::{DirectoryError, DirectoryResult};
use crate::model::{Contact, ContactDraft, ContactRecord, Id, Relationship};
use crate::validation;

pub fn list_contacts(
    conn: &Connection,
    search: Option<&str>,
    relationship: Option<&str>,
) -> DirectoryResult<Vec<Contact>> {
    contact_repo::search(conn, search, relationship)
}

pub fn get_contact(conn: &Connection, id: Id<Contact>) -> DirectoryResult<Contact> {
    contact_repo::find_by_id(conn, id)?.ok_or_else(|| DirectoryError::NotFound {
        entity_type: "Contact".into(),
        id: id.value,
    })
}

pub fn create_contact(conn: &mut Connection, draft: &ContactDraft) -> DirectoryResult<Contact> {
    let record_name = validation::non_blank(draft.name.as_deref().unwrap_or_default(), "name")?;

    // Resolve the relationship name and insert in one transaction so the
    // resolved id cannot dangle by the time the row is written.
    let tx = conn.transaction()?;
    let rel = resolve_relationship(&tx, draft.relationship.as_deref())?;
    let record = ContactRecord {
        name: record_name,
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        address: draft.address.clone(),
        relationship_id: rel.id,
        notes: draft.notes.clone(),
    };
    let id = contact_repo::insert(&tx, &record)?;
    tx.commit()?;

    Ok(record.into_contact(id, rel.name))
}

/// Full-row replacement: every column is overwritten with the supplied
/// values, so omitted optional fields become NULL. The name column is NOT
/// NULL, which makes an absent or blank name a validation failure here
/// rather than a constraint error from storage.
pub fn update_contact(
    conn: &mut Connection,
    id: Id<Contact>,
    draft: &ContactDraft,
) -> DirectoryResult<Contact> {
    let record_name = validation::non_blank(draft.name.as_deref().unwrap_or_default(), "name")?;

    let tx = conn.transaction()?;
    let rel = resolve_relationship(&tx, draft.relationship.as_deref())?;
    let record = ContactRecord {
        name: record_name,
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        address: draft.address.clone(),
        relationship_id: rel.id,
        notes: draft.notes.clone(),
    };
    let affected = contact_repo::update(&tx, id, &record)?;
    if affected == 0 {
        return Err(DirectoryError::NotFound {
            entity_type: "Contact".into(),
            id: id.value,
        });
    }
    tx.commit()?;

    Ok(record.into_contact(id, rel.name))
}

/// Idempotent: deleting an id that does not exist still reports success.
pub fn delete_contact(conn: &Connection, id: Id<Contact>) -> DirectoryResult<bool> {
    contact_repo::delete(conn, id)?;
    Ok(true)
}

/// An absent name falls through to an empty-string lookup, which finds no
/// match and is rejected the same way as an unknown name.
fn resolve_relationship(conn: &Connection, name: Option<&str>) -> DirectoryResult<Relationship> {
    let name = name.unwrap_or_default();
    relationship_repo::find_by_name(conn, name)?.ok_or_else(|| {
        DirectoryError::InvalidRelationship {
            name: name.to_string(),
        }
    })
}
