//! Refresh timestamps for client-side cache invalidation.
//!
//! The server keeps one timestamp per data scope and bumps it on every
//! mutation in that scope. Clients poll `GET /refresh` and refetch only the
//! scopes whose timestamp moved since their last fetch.

use crate::error::CoreError;
use crate::types::Timestamp;

/// The data scopes clients can watch for changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshScope {
    Recipes,
    MealPlan,
    Users,
    Groups,
}

/// All scopes, in the order they are reported.
pub const ALL_SCOPES: &[RefreshScope] = &[
    RefreshScope::Recipes,
    RefreshScope::MealPlan,
    RefreshScope::Users,
    RefreshScope::Groups,
];

impl RefreshScope {
    /// Stable wire / storage name of the scope.
    pub fn as_str(self) -> &'static str {
        match self {
            RefreshScope::Recipes => "recipes",
            RefreshScope::MealPlan => "mealplan",
            RefreshScope::Users => "users",
            RefreshScope::Groups => "groups",
        }
    }

    /// Parse a stored scope name.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "recipes" => Ok(RefreshScope::Recipes),
            "mealplan" => Ok(RefreshScope::MealPlan),
            "users" => Ok(RefreshScope::Users),
            "groups" => Ok(RefreshScope::Groups),
            other => Err(CoreError::Internal(format!(
                "Unknown refresh scope '{other}'"
            ))),
        }
    }
}

/// Last-modified marker for one scope.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshStamp {
    pub scope: RefreshScope,
    pub refreshed_at: Timestamp,
}
