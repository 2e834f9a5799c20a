use crate::error::{DirectoryError, DirectoryResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> DirectoryResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(DirectoryError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}
