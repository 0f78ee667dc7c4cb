mod author;
mod book;
mod instance;
mod user;

pub use self::{author::*, book::*, instance::*, user::*};
