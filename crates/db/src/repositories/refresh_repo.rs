//! Repository for the `refresh_timestamps` table.
//!
//! One row per scope, seeded by the migrations; `touch` upserts so a
//! missing row heals itself.

use std::collections::HashMap;

use async_trait::async_trait;

use ladle_core::refresh::{RefreshScope, RefreshStamp, ALL_SCOPES};

use crate::error::StoreError;
use crate::models::RefreshRow;
use crate::store::RefreshStore;
use crate::DbPool;

/// sqlx-backed [`RefreshStore`].
pub struct PgRefreshStore {
    pool: DbPool,
}

impl PgRefreshStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshStore for PgRefreshStore {
    async fn list(&self) -> Result<Vec<RefreshStamp>, StoreError> {
        let rows =
            sqlx::query_as::<_, RefreshRow>("SELECT scope, refreshed_at FROM refresh_timestamps")
                .fetch_all(&self.pool)
                .await?;

        let mut by_scope = HashMap::new();
        for row in rows {
            let scope = RefreshScope::parse(&row.scope)
                .map_err(|e| StoreError::Corrupt(e.to_string()))?;
            by_scope.insert(scope, row.refreshed_at);
        }

        Ok(ALL_SCOPES
            .iter()
            .filter_map(|scope| {
                by_scope.get(scope).map(|ts| RefreshStamp {
                    scope: *scope,
                    refreshed_at: *ts,
                })
            })
            .collect())
    }

    async fn touch(&self, scope: RefreshScope) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO refresh_timestamps (scope, refreshed_at) VALUES ($1, NOW()) \
             ON CONFLICT (scope) DO UPDATE SET refreshed_at = NOW()",
        )
        .bind(scope.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
