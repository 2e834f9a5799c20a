use rusqlite::{params, params_from_iter, Connection};

use crate::error::DirectoryResult;
use crate::model::{Contact, ContactRecord, Id};

const SELECT_CONTACT: &str = "
    SELECT contacts.id, contacts.name, contacts.email, contacts.phone,
           contacts.address, contacts.relationship_id, contacts.notes,
           relationships.name
    FROM contacts
    LEFT JOIN relationships ON contacts.relationship_id = relationships.id";

pub fn insert(conn: &Connection, record: &ContactRecord) -> DirectoryResult<Id<Contact>> {
    conn.execute(
        "INSERT INTO contacts (name, email, phone, address, relationship_id, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.name,
            record.email,
            record.phone,
            record.address,
            record.relationship_id.value,
            record.notes,
        ],
    )?;
    Ok(Id::new(conn.last_insert_rowid()))
}

/// Full-row overwrite. Returns the number of rows affected (0 when no
/// contact has that id).
pub fn update(conn: &Connection, id: Id<Contact>, record: &ContactRecord) -> DirectoryResult<usize> {
    let affected = conn.execute(
        "UPDATE contacts
         SET name = ?1, email = ?2, phone = ?3, address = ?4,
             relationship_id = ?5, notes = ?6
         WHERE id = ?7",
        params![
            record.name,
            record.email,
            record.phone,
            record.address,
            record.relationship_id.value,
            record.notes,
            id.value,
        ],
    )?;
    Ok(affected)
}

/// Delete by primary key. Returns the number of rows affected; deleting a
/// missing id is not an error.
pub fn delete(conn: &Connection, id: Id<Contact>) -> DirectoryResult<usize> {
    let affected = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id.value])?;
    Ok(affected)
}

pub fn find_by_id(conn: &Connection, id: Id<Contact>) -> DirectoryResult<Option<Contact>> {
    let sql = format!("{SELECT_CONTACT} WHERE contacts.id = ?1");
    let mut stmt = conn.prepare(&sql)?;

    let result = stmt.query_row(params![id.value], row_to_contact);

    match result {
        Ok(contact) => Ok(Some(contact)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// List contacts, optionally narrowed by an unanchored substring match on
/// name/email/phone and/or an exact relationship-name filter. Both filters
/// combine with AND. Results come back in insertion order.
pub fn search(
    conn: &Connection,
    search: Option<&str>,
    relationship: Option<&str>,
) -> DirectoryResult<Vec<Contact>> {
    let mut sql = format!("{SELECT_CONTACT} WHERE 1=1");
    let mut args: Vec<String> = Vec::new();

    if let Some(term) = search {
        sql.push_str(" AND (contacts.name LIKE ? OR contacts.email LIKE ? OR contacts.phone LIKE ?)");
        let pattern = format!("%{}%", term);
        args.push(pattern.clone());
        args.push(pattern.clone());
        args.push(pattern);
    }
    if let Some(name) = relationship {
        sql.push_str(" AND relationships.name = ?");
        args.push(name.to_string());
    }
    sql.push_str(" ORDER BY contacts.id");

    let mut stmt = conn.prepare(&sql)?;
    let contacts = stmt
        .query_map(params_from_iter(args), row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

fn row_to_contact(row: &rusqlite::Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: Id::new(row.get(0)?),
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        address: row.get(4)?,
        relationship_id: Id::new(row.get(5)?),
        notes: row.get(6)?,
        relationship: row.get(7)?,
    })
}
