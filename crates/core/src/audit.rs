//! Audit stamping for `created_by` / `modified_by` columns.

/// Actor recorded when a write happens without an authenticated principal.
pub const SYSTEM_ACTOR: &str = "system";

/// Resolve the audit actor for a write: the principal's username, or
/// [`SYSTEM_ACTOR`] when there is none.
pub fn actor(principal: Option<&str>) -> &str {
    match principal {
        Some(name) if !name.is_empty() => name,
        _ => SYSTEM_ACTOR,
    }
}
