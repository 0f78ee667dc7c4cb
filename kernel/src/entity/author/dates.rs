use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct BirthDate(Date);

impl BirthDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DeathDate(Date);

impl DeathDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
