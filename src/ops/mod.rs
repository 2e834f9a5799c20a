pub mod contact_ops;
pub mod relationship_ops;
