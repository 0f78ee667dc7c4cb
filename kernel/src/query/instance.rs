use crate::database::Transaction;
use crate::entity::{BookInstance, InstanceId, LoanStatus, SelectLimit, SelectOffset, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait InstanceQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &InstanceId,
    ) -> error_stack::Result<Option<BookInstance>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError>;

    /// Every copy currently out on loan, soonest due first.
    async fn find_on_loan(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError>;

    /// One borrower's active loans, soonest due first.
    async fn find_on_loan_by_borrower(
        &self,
        con: &mut Connection,
        borrower: &UserId,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError>;

    async fn count(&self, con: &mut Connection) -> error_stack::Result<i64, KernelError>;

    async fn count_by_status(
        &self,
        con: &mut Connection,
        status: LoanStatus,
    ) -> error_stack::Result<i64, KernelError>;
}

pub trait DependOnInstanceQuery<Connection: Transaction>: Sync + Send + 'static {
    type InstanceQuery: InstanceQuery<Connection>;
    fn instance_query(&self) -> &Self::InstanceQuery;
}
