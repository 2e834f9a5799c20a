use serde::{Deserialize, Serialize};

use super::ids::Id;

/// A relationship label ("Work", "Family", "Friend"). Read-only from the HTTP
/// API; rows are seeded out of band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub id: Id<Relationship>,
    pub name: String,
}
