mod dates;
mod id;
mod name;

pub use self::{dates::*, id::*, name::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Author {
    id: AuthorId,
    first_name: AuthorFirstName,
    last_name: AuthorLastName,
    date_of_birth: Option<BirthDate>,
    date_of_death: Option<DeathDate>,
}

impl Author {
    pub fn new(
        id: AuthorId,
        first_name: AuthorFirstName,
        last_name: AuthorLastName,
        date_of_birth: Option<BirthDate>,
        date_of_death: Option<DeathDate>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            date_of_birth,
            date_of_death,
        }
    }
}
