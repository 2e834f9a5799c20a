use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("{field} is required")]
    BlankField { field: String },

    #[error("invalid relationship: {name:?}")]
    InvalidRelationship { name: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: i64 },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

impl DirectoryError {
    /// True for errors the caller can correct by fixing the request body.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DirectoryError::BlankField { .. } | DirectoryError::InvalidRelationship { .. }
        )
    }
}
