use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::AuthorQuery;
use kernel::interface::update::AuthorModifier;
use kernel::prelude::entity::{
    Author, AuthorFirstName, AuthorId, AuthorLastName, BirthDate, DeathDate, SelectLimit,
    SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery<PostgresTransaction> for PostgresAuthorRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::find_all(con, limit, offset).await
    }

    async fn count(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<i64, KernelError> {
        PgAuthorInternal::count(con).await
    }
}

#[async_trait::async_trait]
impl AuthorModifier<PostgresTransaction> for PostgresAuthorRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::create(con, author).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::update(con, author).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::delete(con, author_id).await
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
}

impl From<AuthorRow> for Author {
    fn from(value: AuthorRow) -> Self {
        Author::new(
            AuthorId::new(value.id),
            AuthorFirstName::new(value.first_name),
            AuthorLastName::new(value.last_name),
            value.date_of_birth.map(BirthDate::new),
            value.date_of_death.map(DeathDate::new),
        )
    }
}

pub(in crate::database) struct PgAuthorInternal;

impl PgAuthorInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                first_name,
                last_name,
                date_of_birth,
                date_of_death
            FROM
                authors
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Author::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                first_name,
                last_name,
                date_of_birth,
                date_of_death
            FROM
                authors
            ORDER BY
                last_name, first_name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn count(con: &mut PgConnection) -> error_stack::Result<i64, KernelError> {
        sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            SELECT COUNT(*) FROM authors
            "#,
        )
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn create(
        con: &mut PgConnection,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO authors (id, first_name, last_name, date_of_birth, date_of_death)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(author.id().as_ref())
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .bind(author.date_of_birth().as_ref().map(|date| *date.as_ref()))
        .bind(author.date_of_death().as_ref().map(|date| *date.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE authors
            SET first_name = $2, last_name = $3, date_of_birth = $4, date_of_death = $5
            WHERE id = $1
            "#,
        )
        .bind(author.id().as_ref())
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .bind(author.date_of_birth().as_ref().map(|date| *date.as_ref()))
        .bind(author.date_of_death().as_ref().map(|date| *date.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM authors
            WHERE id = $1
            "#,
        )
        .bind(author_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::AuthorQuery;
    use kernel::interface::update::AuthorModifier;
    use kernel::prelude::entity::{
        Author, AuthorFirstName, AuthorId, AuthorLastName, BirthDate,
    };
    use kernel::KernelError;
    use time::macros::date;

    use crate::database::postgres::{PostgresAuthorRepository, PostgresDatabase};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let author_id = AuthorId::new(uuid::Uuid::new_v4());
        let author = Author::new(
            author_id.clone(),
            AuthorFirstName::new("Italo"),
            AuthorLastName::new("Calvino"),
            Some(BirthDate::new(date!(1923 - 10 - 15))),
            None,
        );
        PostgresAuthorRepository.create(&mut con, &author).await?;

        let found = PostgresAuthorRepository
            .find_by_id(&mut con, &author_id)
            .await?;
        assert_eq!(found, Some(author.clone()));

        PostgresAuthorRepository.delete(&mut con, &author_id).await?;
        let found = PostgresAuthorRepository
            .find_by_id(&mut con, &author_id)
            .await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }
}
