mod id;
mod isbn;
mod summary;
mod title;

pub use self::{id::*, isbn::*, summary::*, title::*};
use crate::entity::AuthorId;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author_id: AuthorId,
    isbn: Option<BookIsbn>,
    summary: Option<BookSummary>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author_id: AuthorId,
        isbn: Option<BookIsbn>,
        summary: Option<BookSummary>,
    ) -> Self {
        Self {
            id,
            title,
            author_id,
            isbn,
            summary,
        }
    }
}
