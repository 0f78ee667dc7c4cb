use error_stack::Report;
use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::InstanceQuery;
use kernel::interface::update::InstanceModifier;
use kernel::prelude::entity::{
    BookId, BookInstance, DueDate, Imprint, InstanceId, LoanStatus, SelectLimit, SelectOffset,
    UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresInstanceRepository;

#[async_trait::async_trait]
impl InstanceQuery<PostgresTransaction> for PostgresInstanceRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &InstanceId,
    ) -> error_stack::Result<Option<BookInstance>, KernelError> {
        PgInstanceInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        PgInstanceInternal::find_all(con, limit, offset).await
    }

    async fn find_on_loan(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        PgInstanceInternal::find_on_loan(con, limit, offset).await
    }

    async fn find_on_loan_by_borrower(
        &self,
        con: &mut PostgresTransaction,
        borrower: &UserId,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        PgInstanceInternal::find_on_loan_by_borrower(con, borrower).await
    }

    async fn count(&self, con: &mut PostgresTransaction) -> error_stack::Result<i64, KernelError> {
        PgInstanceInternal::count(con).await
    }

    async fn count_by_status(
        &self,
        con: &mut PostgresTransaction,
        status: LoanStatus,
    ) -> error_stack::Result<i64, KernelError> {
        PgInstanceInternal::count_by_status(con, status).await
    }
}

#[async_trait::async_trait]
impl InstanceModifier<PostgresTransaction> for PostgresInstanceRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        PgInstanceInternal::create(con, instance).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        PgInstanceInternal::update(con, instance).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        instance_id: &InstanceId,
    ) -> error_stack::Result<(), KernelError> {
        PgInstanceInternal::delete(con, instance_id).await
    }
}

#[derive(sqlx::FromRow)]
struct InstanceRow {
    id: Uuid,
    book_id: Uuid,
    imprint: String,
    status: String,
    due_back: Option<Date>,
    borrower: Option<Uuid>,
}

impl TryFrom<InstanceRow> for BookInstance {
    type Error = Report<KernelError>;

    fn try_from(value: InstanceRow) -> Result<Self, Self::Error> {
        let status = LoanStatus::from_code(&value.status).ok_or_else(|| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown loan status code: {}", value.status))
        })?;
        Ok(BookInstance::new(
            InstanceId::new(value.id),
            BookId::new(value.book_id),
            Imprint::new(value.imprint),
            status,
            value.due_back.map(DueDate::new),
            value.borrower.map(UserId::new),
        ))
    }
}

pub(in crate::database) struct PgInstanceInternal;

impl PgInstanceInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &InstanceId,
    ) -> error_stack::Result<Option<BookInstance>, KernelError> {
        let row = sqlx::query_as::<_, InstanceRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                book_id,
                imprint,
                status,
                due_back,
                borrower
            FROM
                book_instances
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(BookInstance::try_from).transpose()
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        let rows = sqlx::query_as::<_, InstanceRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                book_id,
                imprint,
                status,
                due_back,
                borrower
            FROM
                book_instances
            ORDER BY
                id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(BookInstance::try_from).collect()
    }

    async fn find_on_loan(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        let rows = sqlx::query_as::<_, InstanceRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                book_id,
                imprint,
                status,
                due_back,
                borrower
            FROM
                book_instances
            WHERE
                status = 'o'
            ORDER BY
                due_back
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(BookInstance::try_from).collect()
    }

    async fn find_on_loan_by_borrower(
        con: &mut PgConnection,
        borrower: &UserId,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        let rows = sqlx::query_as::<_, InstanceRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                book_id,
                imprint,
                status,
                due_back,
                borrower
            FROM
                book_instances
            WHERE
                status = 'o' AND borrower = $1
            ORDER BY
                due_back
            "#,
        )
        .bind(borrower.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(BookInstance::try_from).collect()
    }

    async fn count(con: &mut PgConnection) -> error_stack::Result<i64, KernelError> {
        sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            SELECT COUNT(*) FROM book_instances
            "#,
        )
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn count_by_status(
        con: &mut PgConnection,
        status: LoanStatus,
    ) -> error_stack::Result<i64, KernelError> {
        sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            SELECT COUNT(*) FROM book_instances
            WHERE status = $1
            "#,
        )
        .bind(status.as_code())
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn create(
        con: &mut PgConnection,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO book_instances (id, book_id, imprint, status, due_back, borrower)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(instance.id().as_ref())
        .bind(instance.book_id().as_ref())
        .bind(instance.imprint().as_ref())
        .bind(instance.status().as_code())
        .bind(instance.due_back().as_ref().map(|date| *date.as_ref()))
        .bind(instance.borrower().as_ref().map(|user| *user.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE book_instances
            SET imprint = $2, status = $3, due_back = $4, borrower = $5
            WHERE id = $1
            "#,
        )
        .bind(instance.id().as_ref())
        .bind(instance.imprint().as_ref())
        .bind(instance.status().as_code())
        .bind(instance.due_back().as_ref().map(|date| *date.as_ref()))
        .bind(instance.borrower().as_ref().map(|user| *user.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        instance_id: &InstanceId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM book_instances
            WHERE id = $1
            "#,
        )
        .bind(instance_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::{Duration, OffsetDateTime};

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::InstanceQuery;
    use kernel::interface::update::{
        AuthorModifier, BookModifier, InstanceModifier, UserModifier,
    };
    use kernel::prelude::entity::{
        Author, AuthorFirstName, AuthorId, AuthorLastName, Book, BookId, BookInstance, BookTitle,
        DueDate, Imprint, InstanceId, LoanStatus, User, UserId, UserName, UserRole,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresAuthorRepository, PostgresBookRepository, PostgresDatabase,
        PostgresInstanceRepository, PostgresUserRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let author_id = AuthorId::new(uuid::Uuid::new_v4());
        let author = Author::new(
            author_id.clone(),
            AuthorFirstName::new("Dino"),
            AuthorLastName::new("Buzzati"),
            None,
            None,
        );
        PostgresAuthorRepository.create(&mut con, &author).await?;

        let book_id = BookId::new(uuid::Uuid::new_v4());
        let book = Book::new(
            book_id.clone(),
            BookTitle::new("Il deserto dei Tartari"),
            author_id,
            None,
            None,
        );
        PostgresBookRepository.create(&mut con, &book).await?;

        let user_id = UserId::new(uuid::Uuid::new_v4());
        let user = User::new(user_id.clone(), UserName::new("borrower"), UserRole::Member);
        PostgresUserRepository.create(&mut con, &user).await?;

        let due = OffsetDateTime::now_utc().date() + Duration::days(7);
        let instance_id = InstanceId::new(uuid::Uuid::new_v4());
        let instance = BookInstance::new(
            instance_id.clone(),
            book_id,
            Imprint::new("First edition"),
            LoanStatus::OnLoan,
            Some(DueDate::new(due)),
            Some(user_id.clone()),
        );
        PostgresInstanceRepository.create(&mut con, &instance).await?;

        let found = PostgresInstanceRepository
            .find_by_id(&mut con, &instance_id)
            .await?;
        assert_eq!(found, Some(instance.clone()));

        let loans = PostgresInstanceRepository
            .find_on_loan_by_borrower(&mut con, &user_id)
            .await?;
        assert_eq!(loans, vec![instance]);

        PostgresInstanceRepository
            .delete(&mut con, &instance_id)
            .await?;
        let found = PostgresInstanceRepository
            .find_by_id(&mut con, &instance_id)
            .await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }
}
