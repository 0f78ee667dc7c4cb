use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    AuthorId, Book, BookId, BookIsbn, BookSummary, BookTitle, SelectLimit, SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery<PostgresTransaction> for PostgresBookRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con, limit, offset).await
    }

    async fn count(&self, con: &mut PostgresTransaction) -> error_stack::Result<i64, KernelError> {
        PgBookInternal::count(con).await
    }
}

#[async_trait::async_trait]
impl BookModifier<PostgresTransaction> for PostgresBookRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, book_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author_id: Uuid,
    isbn: Option<String>,
    summary: Option<String>,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            AuthorId::new(value.author_id),
            value.isbn.map(BookIsbn::new),
            value.summary.map(BookSummary::new),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                title,
                author_id,
                isbn,
                summary
            FROM
                books
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                title,
                author_id,
                isbn,
                summary
            FROM
                books
            ORDER BY
                title
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn count(con: &mut PgConnection) -> error_stack::Result<i64, KernelError> {
        sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            SELECT COUNT(*) FROM books
            "#,
        )
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn create(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO books (id, title, author_id, isbn, summary)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.author_id().as_ref())
        .bind(book.isbn().as_ref().map(|isbn| isbn.as_ref().as_str()))
        .bind(
            book.summary()
                .as_ref()
                .map(|summary| summary.as_ref().as_str()),
        )
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE books
            SET title = $2, author_id = $3, isbn = $4, summary = $5
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.author_id().as_ref())
        .bind(book.isbn().as_ref().map(|isbn| isbn.as_ref().as_str()))
        .bind(
            book.summary()
                .as_ref()
                .map(|summary| summary.as_ref().as_str()),
        )
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::{AuthorModifier, BookModifier};
    use kernel::prelude::entity::{
        Author, AuthorFirstName, AuthorId, AuthorLastName, Book, BookId, BookTitle,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresAuthorRepository, PostgresBookRepository, PostgresDatabase,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let author_id = AuthorId::new(uuid::Uuid::new_v4());
        let author = Author::new(
            author_id.clone(),
            AuthorFirstName::new("Primo"),
            AuthorLastName::new("Levi"),
            None,
            None,
        );
        PostgresAuthorRepository.create(&mut con, &author).await?;

        let book_id = BookId::new(uuid::Uuid::new_v4());
        let book = Book::new(
            book_id.clone(),
            BookTitle::new("Il sistema periodico"),
            author_id,
            None,
            None,
        );
        PostgresBookRepository.create(&mut con, &book).await?;

        let found = PostgresBookRepository.find_by_id(&mut con, &book_id).await?;
        assert_eq!(found, Some(book));

        PostgresBookRepository.delete(&mut con, &book_id).await?;
        let found = PostgresBookRepository.find_by_id(&mut con, &book_id).await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }
}
