use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserId, UserName};
use kernel::KernelError;

use crate::transfer::{CreateUserDto, GetUserDto, UserDto};

#[async_trait::async_trait]
pub trait GetUserService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
    async fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let user = self.user_query().find_by_id(&mut connection, &id).await?;

        Ok(user.map(UserDto::from))
    }
}

impl<Connection: Transaction + Send, T> GetUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait HandleUserService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserModifier<Connection>
{
    async fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let uuid = Uuid::new_v4();
        let user = User::new(UserId::new(uuid), UserName::new(dto.name), dto.role);
        self.user_modifier().create(&mut connection, &user).await?;
        connection.commit().await?;

        Ok(uuid)
    }
}

impl<Connection: Transaction + Send, T> HandleUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserModifier<Connection>
{
}
