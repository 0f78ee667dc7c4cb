use crate::database::Transaction;
use crate::entity::{Author, AuthorId, SelectLimit, SelectOffset};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AuthorQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError>;

    /// Ordered by last name, the catalog's listing order.
    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError>;

    async fn count(&self, con: &mut Connection) -> error_stack::Result<i64, KernelError>;
}

pub trait DependOnAuthorQuery<Connection: Transaction>: Sync + Send + 'static {
    type AuthorQuery: AuthorQuery<Connection>;
    fn author_query(&self) -> &Self::AuthorQuery;
}
