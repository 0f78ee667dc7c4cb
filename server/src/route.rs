mod author;
mod book;
mod index;
mod instance;
mod user;

pub use self::{
    author::AuthorRouter, book::BookRouter, index::IndexRouter, instance::InstanceRouter,
    user::UserRouter,
};
