use uuid::Uuid;

use kernel::prelude::entity::{DestructUser, User, UserRole};

#[derive(Debug, Clone)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub role: UserRole,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser { id, name, role } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }
}

pub struct GetUserDto {
    pub id: Uuid,
}

pub struct CreateUserDto {
    pub name: String,
    pub role: UserRole,
}
