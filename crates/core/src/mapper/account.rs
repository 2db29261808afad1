//! Mappers for users and user groups.

use crate::account::{User, UserGroup};
use crate::dto::{UserDto, UserGroupDto};

/// Maps [`User`] entities to [`UserDto`] and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl UserMapper {
    pub fn entity_to_dto(&self, entity: &User) -> UserDto {
        UserDto {
            id: entity.id,
            username: entity.username.clone(),
            name: entity.name.clone(),
            group_id: entity.group_id,
        }
    }

    pub fn dto_to_entity(&self, dto: &UserDto, existing: Option<User>) -> User {
        match existing {
            Some(mut entity) => {
                entity.username = dto.username.clone();
                entity.name = dto.name.clone();
                entity.group_id = dto.group_id;
                entity
            }
            None => User {
                id: dto.id,
                username: dto.username.clone(),
                name: dto.name.clone(),
                group_id: dto.group_id,
            },
        }
    }
}

/// Maps [`UserGroup`] entities to [`UserGroupDto`] and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserGroupMapper;

impl UserGroupMapper {
    pub fn entity_to_dto(&self, entity: &UserGroup) -> UserGroupDto {
        UserGroupDto {
            id: entity.id,
            name: entity.name.clone(),
        }
    }

    pub fn dto_to_entity(&self, dto: &UserGroupDto, existing: Option<UserGroup>) -> UserGroup {
        match existing {
            Some(mut entity) => {
                entity.name = dto.name.clone();
                entity
            }
            None => UserGroup {
                id: dto.id,
                name: dto.name.clone(),
            },
        }
    }
}
