//! Repositories for the `users` and `user_groups` tables.

use async_trait::async_trait;

use ladle_core::account::{User, UserGroup};
use ladle_core::types::DbId;

use crate::error::StoreError;
use crate::models::{UserGroupRow, UserRow};
use crate::store::{UserGroupStore, UserStore};
use crate::DbPool;

/// Column list for `users` queries.
const USER_COLUMNS: &str = "id, username, name, group_id";

/// Column list for `user_groups` queries.
const GROUP_COLUMNS: &str = "id, name";

/// sqlx-backed [`UserStore`].
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find(&self, id: DbId) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY username, id");
        let rows = sqlx::query_as::<_, UserRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn save(&self, user: User) -> Result<User, StoreError> {
        let row = match user.id {
            Some(id) => {
                let query = format!(
                    "UPDATE users SET username = $1, name = $2, group_id = $3 \
                     WHERE id = $4 RETURNING {USER_COLUMNS}"
                );
                sqlx::query_as::<_, UserRow>(&query)
                    .bind(&user.username)
                    .bind(&user.name)
                    .bind(user.group_id)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or(StoreError::Missing { entity: "User", id })?
            }
            None => {
                let query = format!(
                    "INSERT INTO users (username, name, group_id) \
                     VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
                );
                sqlx::query_as::<_, UserRow>(&query)
                    .bind(&user.username)
                    .bind(&user.name)
                    .bind(user.group_id)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(User::from(row))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// sqlx-backed [`UserGroupStore`].
pub struct PgUserGroupStore {
    pool: DbPool,
}

impl PgUserGroupStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserGroupStore for PgUserGroupStore {
    async fn find(&self, id: DbId) -> Result<Option<UserGroup>, StoreError> {
        let query = format!("SELECT {GROUP_COLUMNS} FROM user_groups WHERE id = $1");
        let row = sqlx::query_as::<_, UserGroupRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(UserGroup::from))
    }

    async fn list(&self) -> Result<Vec<UserGroup>, StoreError> {
        let query = format!("SELECT {GROUP_COLUMNS} FROM user_groups ORDER BY name, id");
        let rows = sqlx::query_as::<_, UserGroupRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(UserGroup::from).collect())
    }

    async fn save(&self, group: UserGroup) -> Result<UserGroup, StoreError> {
        let row = match group.id {
            Some(id) => {
                let query = format!(
                    "UPDATE user_groups SET name = $1 WHERE id = $2 RETURNING {GROUP_COLUMNS}"
                );
                sqlx::query_as::<_, UserGroupRow>(&query)
                    .bind(&group.name)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or(StoreError::Missing {
                        entity: "UserGroup",
                        id,
                    })?
            }
            None => {
                let query = format!(
                    "INSERT INTO user_groups (name) VALUES ($1) RETURNING {GROUP_COLUMNS}"
                );
                sqlx::query_as::<_, UserGroupRow>(&query)
                    .bind(&group.name)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(UserGroup::from(row))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        // Members keep their accounts; group_id is set NULL by the FK.
        let result = sqlx::query("DELETE FROM user_groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
