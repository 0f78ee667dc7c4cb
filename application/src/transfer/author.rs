use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{Author, DestructAuthor, SelectLimit, SelectOffset};

#[derive(Debug, Clone)]
pub struct AuthorDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let DestructAuthor {
            id,
            first_name,
            last_name,
            date_of_birth,
            date_of_death,
        } = value.into_destruct();
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: date_of_birth.map(Into::into),
            date_of_death: date_of_death.map(Into::into),
        }
    }
}

pub struct GetAuthorDto {
    pub id: Uuid,
}

pub struct GetAllAuthorDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateAuthorDto {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

pub struct UpdateAuthorDto {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

pub struct DeleteAuthorDto {
    pub id: Uuid,
}
