use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{AuthorId, Book, BookId, BookIsbn, BookSummary, BookTitle};
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }

    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self
            .book_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait HandleBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let uuid = Uuid::new_v4();
        let book = Book::new(
            BookId::new(uuid),
            BookTitle::new(dto.title),
            AuthorId::new(dto.author_id),
            dto.isbn.map(BookIsbn::new),
            dto.summary.map(BookSummary::new),
        );
        self.book_modifier().create(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(uuid)
    }

    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        let current = book.into_destruct();
        let book = Book::new(
            current.id,
            dto.title.map(BookTitle::new).unwrap_or(current.title),
            dto.author_id
                .map(AuthorId::new)
                .unwrap_or(current.author_id),
            dto.isbn.map(BookIsbn::new).or(current.isbn),
            dto.summary.map(BookSummary::new).or(current.summary),
        );

        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(())
    }

    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> HandleBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}
