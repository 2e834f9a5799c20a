use rusqlite::{params, Connection};

use crate::error::DirectoryResult;
use crate::model::{Id, Relationship};

/// Insert a relationship label. The HTTP API never writes relationships;
/// this is used by startup seeding and by tests.
pub fn insert(conn: &Connection, name: &str) -> DirectoryResult<Relationship> {
    conn.execute(
        "INSERT INTO relationships (name) VALUES (?1)",
        params![name],
    )?;
    Ok(Relationship {
        id: Id::new(conn.last_insert_rowid()),
        name: name.to_string(),
    })
}

/// Exact name lookup. Case-sensitive: the relationships table uses the
/// default BINARY collation and the API contract does not normalize.
pub fn find_by_name(conn: &Connection, name: &str) -> DirectoryResult<Option<Relationship>> {
    let mut stmt = conn.prepare("SELECT id, name FROM relationships WHERE name = ?1")?;

    let result = stmt.query_row(params![name], |row| {
        Ok(Relationship {
            id: Id::new(row.get(0)?),
            name: row.get(1)?,
        })
    });

    match result {
        Ok(rel) => Ok(Some(rel)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Every relationship name, in insertion order.
pub fn all_names(conn: &Connection) -> DirectoryResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM relationships ORDER BY id")?;

    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;

    Ok(names)
}
