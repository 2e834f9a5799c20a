pub mod contact_repo;
pub mod relationship_repo;
pub mod schema;
