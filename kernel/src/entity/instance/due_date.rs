use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct DueDate(Date);

impl DueDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
