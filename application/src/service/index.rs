use kernel::interface::counter::{DependOnVisitCounter, VisitCounter};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery, DependOnInstanceQuery,
    InstanceQuery,
};
use kernel::prelude::entity::LoanStatus;
use kernel::KernelError;

use crate::transfer::{GetSummaryDto, SummaryDto};

#[async_trait::async_trait]
pub trait CatalogSummaryService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnAuthorQuery<Connection>
    + DependOnBookQuery<Connection>
    + DependOnInstanceQuery<Connection>
    + DependOnVisitCounter
{
    /// Home-page numbers plus the per-visitor counter. The count reported is
    /// the value before this visit, matching the original page.
    async fn summarize(&self, dto: GetSummaryDto) -> error_stack::Result<SummaryDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let num_books = self.book_query().count(&mut connection).await?;
        let num_instances = self.instance_query().count(&mut connection).await?;
        let num_instances_available = self
            .instance_query()
            .count_by_status(&mut connection, LoanStatus::Available)
            .await?;
        let num_authors = self.author_query().count(&mut connection).await?;

        let num_visits = self.visit_counter().get(&dto.visitor_key).await?;
        self.visit_counter()
            .set(&dto.visitor_key, num_visits + 1)
            .await?;

        Ok(SummaryDto {
            num_books,
            num_instances,
            num_instances_available,
            num_authors,
            num_visits,
        })
    }
}

impl<Connection: Transaction + Send, T> CatalogSummaryService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnAuthorQuery<Connection>
        + DependOnBookQuery<Connection>
        + DependOnInstanceQuery<Connection>
        + DependOnVisitCounter
{
}
