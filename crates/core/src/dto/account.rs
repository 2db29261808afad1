//! Transfer objects for users and user groups.

use serde::Deserialize;
use validator::Validate;

use crate::serializer::{Dto, WireValue};
use crate::types::DbId;

/// Wire mirror of [`crate::account::User`].
///
/// Wire field order: `id`, `username`, `name`, `groupId`.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 60, message = "username must be 1-60 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub name: String,
    #[serde(default)]
    pub group_id: Option<DbId>,
}

impl Dto for UserDto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)> {
        vec![
            ("id", WireValue::opt(self.id)),
            ("username", self.username.as_str().into()),
            ("name", self.name.as_str().into()),
            ("groupId", WireValue::opt(self.group_id)),
        ]
    }
}

/// Wire mirror of [`crate::account::UserGroup`].
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserGroupDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 120, message = "group name must be 1-120 characters"))]
    pub name: String,
}

impl Dto for UserGroupDto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)> {
        vec![
            ("id", WireValue::opt(self.id)),
            ("name", self.name.as_str().into()),
        ]
    }
}
