use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnInstanceQuery, InstanceQuery};
use kernel::interface::update::{DependOnInstanceModifier, InstanceModifier};
use kernel::prelude::entity::{BookId, BookInstance, DueDate, Imprint, InstanceId, UserId};
use kernel::KernelError;

use crate::transfer::{
    CreateInstanceDto, DeleteInstanceDto, GetAllInstanceDto, GetBorrowerLoansDto, GetInstanceDto,
    GetLoanedInstanceDto, InstanceDto, UpdateInstanceDto,
};

#[async_trait::async_trait]
pub trait GetInstanceService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnInstanceQuery<Connection>
{
    async fn get_instance(
        &self,
        dto: GetInstanceDto,
    ) -> error_stack::Result<Option<InstanceDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = InstanceId::new(dto.id);
        let instance = self
            .instance_query()
            .find_by_id(&mut connection, &id)
            .await?;

        Ok(instance.map(InstanceDto::from))
    }

    async fn get_all_instances(
        &self,
        dto: GetAllInstanceDto,
    ) -> error_stack::Result<Vec<InstanceDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let instances = self
            .instance_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(instances.into_iter().map(InstanceDto::from).collect())
    }

    async fn get_loaned_instances(
        &self,
        dto: GetLoanedInstanceDto,
    ) -> error_stack::Result<Vec<InstanceDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let instances = self
            .instance_query()
            .find_on_loan(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(instances.into_iter().map(InstanceDto::from).collect())
    }

    async fn get_borrower_loans(
        &self,
        dto: GetBorrowerLoansDto,
    ) -> error_stack::Result<Vec<InstanceDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let borrower = UserId::new(dto.borrower);
        let instances = self
            .instance_query()
            .find_on_loan_by_borrower(&mut connection, &borrower)
            .await?;

        Ok(instances.into_iter().map(InstanceDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetInstanceService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnInstanceQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait HandleInstanceService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnInstanceQuery<Connection>
    + DependOnInstanceModifier<Connection>
{
    async fn create_instance(
        &self,
        dto: CreateInstanceDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let uuid = Uuid::new_v4();
        let instance = BookInstance::new(
            InstanceId::new(uuid),
            BookId::new(dto.book_id),
            Imprint::new(dto.imprint),
            dto.status,
            dto.due_back.map(DueDate::new),
            dto.borrower.map(UserId::new),
        );
        self.instance_modifier()
            .create(&mut connection, &instance)
            .await?;
        connection.commit().await?;

        Ok(uuid)
    }

    async fn update_instance(
        &self,
        dto: UpdateInstanceDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = InstanceId::new(dto.id);
        let instance = self
            .instance_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        let current = instance.into_destruct();
        let instance = BookInstance::new(
            current.id,
            current.book_id,
            dto.imprint.map(Imprint::new).unwrap_or(current.imprint),
            dto.status.unwrap_or(current.status),
            current.due_back,
            current.borrower,
        );

        self.instance_modifier()
            .update(&mut connection, &instance)
            .await?;
        connection.commit().await?;

        Ok(())
    }

    async fn delete_instance(
        &self,
        dto: DeleteInstanceDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = InstanceId::new(dto.id);
        self.instance_modifier()
            .delete(&mut connection, &id)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> HandleInstanceService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnInstanceQuery<Connection>
        + DependOnInstanceModifier<Connection>
{
}
