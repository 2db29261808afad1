//! User and user-group entities.
//!
//! Accounts are deliberately thin: authentication is handled outside this
//! service, so a user is just a display identity plus an optional group
//! membership used to scope shared meal plans.

use crate::error::CoreError;
use crate::types::DbId;

/// A person using the service.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<DbId>,
    pub username: String,
    pub name: String,
    /// Group the user belongs to, if any.
    pub group_id: Option<DbId>,
}

/// A household or team sharing recipes and a meal plan.
#[derive(Debug, Clone, PartialEq)]
pub struct UserGroup {
    pub id: Option<DbId>,
    pub name: String,
}

/// Validate a username (non-empty, <= 60 chars, no whitespace).
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.is_empty() {
        return Err(CoreError::Validation("Username must not be empty".into()));
    }
    if username.chars().count() > 60 {
        return Err(CoreError::Validation(
            "Username must be at most 60 characters".into(),
        ));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Username must not contain whitespace".into(),
        ));
    }
    Ok(())
}
