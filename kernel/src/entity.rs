mod author;
mod book;
mod common;
mod instance;
mod user;

pub use self::{author::*, book::*, common::*, instance::*, user::*};
