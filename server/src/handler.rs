use driver::database::{
    PostgresAuthorRepository, PostgresBookRepository, PostgresDatabase, PostgresInstanceRepository,
    PostgresTransaction, RedisDatabase,
};
use kernel::interface::counter::DependOnVisitCounter;
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{
    DependOnAuthorQuery, DependOnBookQuery, DependOnInstanceQuery,
};
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    visits: RedisDatabase,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;
        let visits = RedisDatabase::new()?;

        Ok(Self { pgpool, visits })
    }
}

// The summary service draws on postgres and redis at once, so the handler
// itself acts as its dependency bundle.
#[async_trait::async_trait]
impl DatabaseConnection<PostgresTransaction> for Handler {
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        self.pgpool.transact().await
    }
}

impl DependOnAuthorQuery<PostgresTransaction> for Handler {
    type AuthorQuery = PostgresAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        self.pgpool.author_query()
    }
}

impl DependOnBookQuery<PostgresTransaction> for Handler {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        self.pgpool.book_query()
    }
}

impl DependOnInstanceQuery<PostgresTransaction> for Handler {
    type InstanceQuery = PostgresInstanceRepository;
    fn instance_query(&self) -> &Self::InstanceQuery {
        self.pgpool.instance_query()
    }
}

impl DependOnVisitCounter for Handler {
    type VisitCounter = RedisDatabase;
    fn visit_counter(&self) -> &Self::VisitCounter {
        self.visits()
    }
}
