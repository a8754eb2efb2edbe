//! Field-level validation for account and contact payloads.
//!
//! Project payloads carry no business rules beyond their shape, which the
//! JSON layer already enforces.

/// Validate that a required text field is present and not blank.
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}
