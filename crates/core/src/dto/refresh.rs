//! Outbound transfer object for refresh stamps.
//!
//! Refresh stamps are server-managed, so there is no inbound form.

use crate::refresh::RefreshStamp;
use crate::serializer::{Dto, WireValue};

/// Wire form of a [`RefreshStamp`]: `{ scope, refreshedAt }`.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshStampDto {
    pub scope: &'static str,
    /// RFC 3339 timestamp.
    pub refreshed_at: String,
}

impl RefreshStampDto {
    pub fn from_entity(entity: &RefreshStamp) -> Self {
        Self {
            scope: entity.scope.as_str(),
            refreshed_at: entity.refreshed_at.to_rfc3339(),
        }
    }
}

impl Dto for RefreshStampDto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)> {
        vec![
            ("scope", self.scope.into()),
            ("refreshedAt", self.refreshed_at.as_str().into()),
        ]
    }
}
