pub mod contact;
pub mod ids;
pub mod relationship;

// Re-exports for convenience
pub use contact::{Contact, ContactDraft, ContactRecord};
pub use ids::Id;
pub use relationship::Relationship;
