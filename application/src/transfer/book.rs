use uuid::Uuid;

use kernel::prelude::entity::{Book, DestructBook, SelectLimit, SelectOffset};

#[derive(Debug, Clone)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub isbn: Option<String>,
    pub summary: Option<String>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author_id,
            isbn,
            summary,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author_id: author_id.into(),
            isbn: isbn.map(Into::into),
            summary: summary.map(Into::into),
        }
    }
}

pub struct GetBookDto {
    pub id: Uuid,
}

pub struct GetAllBookDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateBookDto {
    pub title: String,
    pub author_id: Uuid,
    pub isbn: Option<String>,
    pub summary: Option<String>,
}

pub struct UpdateBookDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub author_id: Option<Uuid>,
    pub isbn: Option<String>,
    pub summary: Option<String>,
}

pub struct DeleteBookDto {
    pub id: Uuid,
}
