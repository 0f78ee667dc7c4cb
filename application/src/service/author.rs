use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{
    Author, AuthorFirstName, AuthorId, AuthorLastName, BirthDate, DeathDate,
};
use kernel::KernelError;

use crate::transfer::{
    AuthorDto, CreateAuthorDto, DeleteAuthorDto, GetAllAuthorDto, GetAuthorDto, UpdateAuthorDto,
};

#[async_trait::async_trait]
pub trait GetAuthorService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnAuthorQuery<Connection>
{
    async fn get_author(
        &self,
        dto: GetAuthorDto,
    ) -> error_stack::Result<Option<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let author = self.author_query().find_by_id(&mut connection, &id).await?;

        Ok(author.map(AuthorDto::from))
    }

    async fn get_all_authors(
        &self,
        dto: GetAllAuthorDto,
    ) -> error_stack::Result<Vec<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let authors = self
            .author_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetAuthorService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnAuthorQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait HandleAuthorService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnAuthorQuery<Connection>
    + DependOnAuthorModifier<Connection>
{
    async fn create_author(&self, dto: CreateAuthorDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let uuid = Uuid::new_v4();
        let author = Author::new(
            AuthorId::new(uuid),
            AuthorFirstName::new(dto.first_name),
            AuthorLastName::new(dto.last_name),
            dto.date_of_birth.map(BirthDate::new),
            dto.date_of_death.map(DeathDate::new),
        );
        self.author_modifier()
            .create(&mut connection, &author)
            .await?;
        connection.commit().await?;

        Ok(uuid)
    }

    async fn update_author(&self, dto: UpdateAuthorDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let author = self
            .author_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        let current = author.into_destruct();
        let author = Author::new(
            current.id,
            dto.first_name
                .map(AuthorFirstName::new)
                .unwrap_or(current.first_name),
            dto.last_name
                .map(AuthorLastName::new)
                .unwrap_or(current.last_name),
            dto.date_of_birth
                .map(BirthDate::new)
                .or(current.date_of_birth),
            dto.date_of_death
                .map(DeathDate::new)
                .or(current.date_of_death),
        );

        self.author_modifier()
            .update(&mut connection, &author)
            .await?;
        connection.commit().await?;

        Ok(())
    }

    async fn delete_author(&self, dto: DeleteAuthorDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        self.author_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> HandleAuthorService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnAuthorQuery<Connection>
        + DependOnAuthorModifier<Connection>
{
}
