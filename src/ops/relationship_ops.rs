use rusqlite::Connection;

use crate::db::relationship_repo;
use crate::error::DirectoryResult;

pub fn relationship_names(conn: &Connection) -> DirectoryResult<Vec<String>> {
    relationship_repo::all_names(conn)
}

/// Insert any of the given names that are not already present. Safe to run
/// on every startup.
pub fn seed_relationships(conn: &Connection, names: &[String]) -> DirectoryResult<usize> {
    let mut inserted = 0;
    for name in names {
        if relationship_repo::find_by_name(conn, name)?.is_none() {
            relationship_repo::insert(conn, name)?;
            inserted += 1;
        }
    }
    Ok(inserted)
}
