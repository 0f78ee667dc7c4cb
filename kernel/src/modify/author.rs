use crate::database::Transaction;
use crate::entity::{Author, AuthorId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AuthorModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        author: &Author,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Connection,
        author: &Author,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Connection,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAuthorModifier<Connection: Transaction>: 'static + Sync + Send {
    type AuthorModifier: AuthorModifier<Connection>;
    fn author_modifier(&self) -> &Self::AuthorModifier;
}
