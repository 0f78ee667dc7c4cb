use error_stack::Report;
use sqlx::{Error, PgConnection, Pool, Postgres};
use std::ops::{Deref, DerefMut};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnAuthorQuery, DependOnBookQuery, DependOnInstanceQuery, DependOnUserQuery,
};
use kernel::interface::update::{
    DependOnAuthorModifier, DependOnBookModifier, DependOnInstanceModifier, DependOnUserModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{author::*, book::*, instance::*, user::*};

mod author;
mod book;
mod instance;
mod user;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        tracing::debug!("connected to postgres");
        Ok(Self { pool })
    }
}

impl Clone for PostgresDatabase {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PostgresTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

/// Kernel-facing wrapper; sqlx's transaction type cannot implement the
/// kernel trait directly.
pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl DependOnAuthorQuery<PostgresTransaction> for PostgresDatabase {
    type AuthorQuery = PostgresAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &PostgresAuthorRepository
    }
}

impl DependOnAuthorModifier<PostgresTransaction> for PostgresDatabase {
    type AuthorModifier = PostgresAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &PostgresAuthorRepository
    }
}

impl DependOnBookQuery<PostgresTransaction> for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier<PostgresTransaction> for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl DependOnInstanceQuery<PostgresTransaction> for PostgresDatabase {
    type InstanceQuery = PostgresInstanceRepository;
    fn instance_query(&self) -> &Self::InstanceQuery {
        &PostgresInstanceRepository
    }
}

impl DependOnInstanceModifier<PostgresTransaction> for PostgresDatabase {
    type InstanceModifier = PostgresInstanceRepository;
    fn instance_modifier(&self) -> &Self::InstanceModifier {
        &PostgresInstanceRepository
    }
}

impl DependOnUserQuery<PostgresTransaction> for PostgresDatabase {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &PostgresUserRepository
    }
}

impl DependOnUserModifier<PostgresTransaction> for PostgresDatabase {
    type UserModifier = PostgresUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &PostgresUserRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            Error::RowNotFound => Report::from(error).change_context(KernelError::NotFound),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
