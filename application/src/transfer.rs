mod author;
mod book;
mod instance;
mod summary;
mod user;

pub use self::{author::*, book::*, instance::*, summary::*, user::*};
