use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AuthorFirstName(String);

impl AuthorFirstName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AuthorLastName(String);

impl AuthorLastName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
