use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::relationship::Relationship;

/// A contact as returned by the API: the stored row plus the relationship
/// name denormalized in from the join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: Id<Contact>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub relationship_id: Id<Relationship>,
    pub notes: Option<String>,
    /// Null only if the foreign key ever dangles; the write path rejects
    /// unknown relationship names, so this should always be present.
    pub relationship: Option<String>,
}

/// Request body for create/update. `relationship` carries a relationship
/// *name*, resolved to an id at write time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub relationship: Option<String>,
    pub notes: Option<String>,
}

/// Column values ready to persist: name validated, relationship resolved.
#[derive(Debug, Clone)]
pub struct ContactRecord {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub relationship_id: Id<Relationship>,
    pub notes: Option<String>,
}

impl ContactRecord {
    /// Build the API representation for a record that was just written,
    /// echoing the supplied values rather than re-reading the row.
    pub fn into_contact(self, id: Id<Contact>, relationship: String) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            relationship_id: self.relationship_id,
            notes: self.notes,
            relationship: Some(relationship),
        }
    }
}
