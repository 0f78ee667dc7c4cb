mod author;
mod book;
mod index;
mod instance;
mod renewal;
mod user;

pub use self::{author::*, book::*, index::*, instance::*, renewal::*, user::*};
