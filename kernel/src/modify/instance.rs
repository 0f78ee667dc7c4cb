use crate::database::Transaction;
use crate::entity::{BookInstance, InstanceId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait InstanceModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Connection,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Connection,
        instance_id: &InstanceId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnInstanceModifier<Connection: Transaction>: 'static + Sync + Send {
    type InstanceModifier: InstanceModifier<Connection>;
    fn instance_modifier(&self) -> &Self::InstanceModifier;
}
