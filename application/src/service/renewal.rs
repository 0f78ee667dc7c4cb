use error_stack::Report;
use time::OffsetDateTime;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnInstanceQuery, InstanceQuery};
use kernel::interface::update::{DependOnInstanceModifier, InstanceModifier};
use kernel::prelude::entity::{BookInstance, DueDate, InstanceId, LoanStatus};
use kernel::{propose_renewal_date, validate_renewal_date, KernelError};

use crate::transfer::{GetInstanceDto, InstanceDto, RenewBookDto, RenewalProposalDto, ReturnBookDto};

/// Librarian-gated loan transitions. Authorization happens in the caller;
/// these services only run the date rule and the persistence.
#[async_trait::async_trait]
pub trait RenewBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnInstanceQuery<Connection>
    + DependOnInstanceModifier<Connection>
{
    /// Instance plus the pre-filled date a renewal form should offer.
    async fn get_renewal_proposal(
        &self,
        dto: GetInstanceDto,
    ) -> error_stack::Result<Option<RenewalProposalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = InstanceId::new(dto.id);
        let instance = self
            .instance_query()
            .find_by_id(&mut connection, &id)
            .await?;

        let today = OffsetDateTime::now_utc().date();
        Ok(instance.map(|instance| RenewalProposalDto {
            instance: InstanceDto::from(instance),
            proposed_renewal_date: propose_renewal_date(today),
        }))
    }

    /// Validates the proposed due-back date and, only on success, writes it
    /// to the instance. A failed validation leaves the row untouched.
    async fn renew_book(
        &self,
        dto: RenewBookDto,
    ) -> error_stack::Result<InstanceDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = InstanceId::new(dto.instance_id);
        let instance = self
            .instance_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        let today = OffsetDateTime::now_utc().date();
        let validated = validate_renewal_date(dto.renewal_date, today).map_err(|error| {
            Report::new(error).change_context(KernelError::Validation(error.to_string()))
        })?;

        let current = instance.into_destruct();
        let instance = BookInstance::new(
            current.id,
            current.book_id,
            current.imprint,
            current.status,
            Some(DueDate::new(validated)),
            current.borrower,
        );

        self.instance_modifier()
            .update(&mut connection, &instance)
            .await?;
        connection.commit().await?;

        Ok(InstanceDto::from(instance))
    }

    /// Marks a copy returned: back on the shelf, no due date, no borrower.
    async fn return_book(
        &self,
        dto: ReturnBookDto,
    ) -> error_stack::Result<InstanceDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = InstanceId::new(dto.instance_id);
        let instance = self
            .instance_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        let current = instance.into_destruct();
        let instance = BookInstance::new(
            current.id,
            current.book_id,
            current.imprint,
            LoanStatus::Available,
            None,
            None,
        );

        self.instance_modifier()
            .update(&mut connection, &instance)
            .await?;
        connection.commit().await?;

        Ok(InstanceDto::from(instance))
    }
}

impl<Connection: Transaction + Send, T> RenewBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnInstanceQuery<Connection>
        + DependOnInstanceModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{DependOnInstanceQuery, InstanceQuery};
    use kernel::interface::update::{DependOnInstanceModifier, InstanceModifier};
    use kernel::prelude::entity::{
        BookId, BookInstance, DueDate, Imprint, InstanceId, LoanStatus, SelectLimit, SelectOffset,
        UserId,
    };
    use kernel::KernelError;

    use crate::transfer::{GetInstanceDto, RenewBookDto, ReturnBookDto};

    use super::RenewBookService;

    pub struct MemoryTransaction;

    #[async_trait::async_trait]
    impl Transaction for MemoryTransaction {
        async fn commit(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
        async fn roll_back(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    pub struct MemoryInstanceRepository {
        rows: Arc<Mutex<HashMap<InstanceId, BookInstance>>>,
    }

    impl MemoryInstanceRepository {
        fn insert(&self, instance: BookInstance) {
            self.rows
                .lock()
                .unwrap()
                .insert(instance.id().clone(), instance);
        }

        fn get(&self, id: &InstanceId) -> Option<BookInstance> {
            self.rows.lock().unwrap().get(id).cloned()
        }
    }

    #[async_trait::async_trait]
    impl InstanceQuery<MemoryTransaction> for MemoryInstanceRepository {
        async fn find_by_id(
            &self,
            _: &mut MemoryTransaction,
            id: &InstanceId,
        ) -> error_stack::Result<Option<BookInstance>, KernelError> {
            Ok(self.get(id))
        }

        async fn find_all(
            &self,
            _: &mut MemoryTransaction,
            _: &SelectLimit,
            _: &SelectOffset,
        ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_on_loan(
            &self,
            _: &mut MemoryTransaction,
            _: &SelectLimit,
            _: &SelectOffset,
        ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
            let mut on_loan: Vec<BookInstance> = self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|instance| *instance.status() == LoanStatus::OnLoan)
                .cloned()
                .collect();
            on_loan.sort_by_key(|instance| instance.due_back().clone());
            Ok(on_loan)
        }

        async fn find_on_loan_by_borrower(
            &self,
            con: &mut MemoryTransaction,
            borrower: &UserId,
        ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
            let limit = SelectLimit::default();
            let offset = SelectOffset::default();
            Ok(self
                .find_on_loan(con, &limit, &offset)
                .await?
                .into_iter()
                .filter(|instance| instance.borrower().as_ref() == Some(borrower))
                .collect())
        }

        async fn count(
            &self,
            _: &mut MemoryTransaction,
        ) -> error_stack::Result<i64, KernelError> {
            Ok(self.rows.lock().unwrap().len() as i64)
        }

        async fn count_by_status(
            &self,
            _: &mut MemoryTransaction,
            status: LoanStatus,
        ) -> error_stack::Result<i64, KernelError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|instance| *instance.status() == status)
                .count() as i64)
        }
    }

    #[async_trait::async_trait]
    impl InstanceModifier<MemoryTransaction> for MemoryInstanceRepository {
        async fn create(
            &self,
            _: &mut MemoryTransaction,
            instance: &BookInstance,
        ) -> error_stack::Result<(), KernelError> {
            self.insert(instance.clone());
            Ok(())
        }

        async fn update(
            &self,
            _: &mut MemoryTransaction,
            instance: &BookInstance,
        ) -> error_stack::Result<(), KernelError> {
            self.insert(instance.clone());
            Ok(())
        }

        async fn delete(
            &self,
            _: &mut MemoryTransaction,
            instance_id: &InstanceId,
        ) -> error_stack::Result<(), KernelError> {
            self.rows.lock().unwrap().remove(instance_id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct TestModule {
        repository: MemoryInstanceRepository,
    }

    #[async_trait::async_trait]
    impl DatabaseConnection<MemoryTransaction> for TestModule {
        async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
            Ok(MemoryTransaction)
        }
    }

    impl DependOnInstanceQuery<MemoryTransaction> for TestModule {
        type InstanceQuery = MemoryInstanceRepository;
        fn instance_query(&self) -> &Self::InstanceQuery {
            &self.repository
        }
    }

    impl DependOnInstanceModifier<MemoryTransaction> for TestModule {
        type InstanceModifier = MemoryInstanceRepository;
        fn instance_modifier(&self) -> &Self::InstanceModifier {
            &self.repository
        }
    }

    fn loaned_instance(due_in_days: i64) -> BookInstance {
        let today = OffsetDateTime::now_utc().date();
        BookInstance::new(
            InstanceId::new(Uuid::new_v4()),
            BookId::new(Uuid::new_v4()),
            Imprint::new("Foreign Lang Ed., 1972"),
            LoanStatus::OnLoan,
            Some(DueDate::new(today + Duration::days(due_in_days))),
            Some(UserId::new(Uuid::new_v4())),
        )
    }

    #[tokio::test]
    async fn renew_updates_due_date() {
        let module = TestModule::default();
        let instance = loaned_instance(3);
        let id: Uuid = instance.id().clone().into();
        module.repository.insert(instance);

        let today = OffsetDateTime::now_utc().date();
        let renewed = module
            .renew_book(RenewBookDto {
                instance_id: id,
                renewal_date: today + Duration::days(7),
            })
            .await
            .unwrap();

        assert_eq!(renewed.due_back, Some(today + Duration::days(7)));
        assert_eq!(renewed.status, LoanStatus::OnLoan);

        let stored = module.repository.get(&InstanceId::new(id)).unwrap();
        assert_eq!(
            stored.due_back().clone().map(time::Date::from),
            Some(today + Duration::days(7))
        );
    }

    #[tokio::test]
    async fn renew_accepts_four_week_boundary() {
        let module = TestModule::default();
        let instance = loaned_instance(3);
        let id: Uuid = instance.id().clone().into();
        module.repository.insert(instance);

        let today = OffsetDateTime::now_utc().date();
        let renewed = module
            .renew_book(RenewBookDto {
                instance_id: id,
                renewal_date: today + Duration::days(28),
            })
            .await
            .unwrap();

        assert_eq!(renewed.due_back, Some(today + Duration::days(28)));
    }

    #[tokio::test]
    async fn renew_rejects_past_date_and_keeps_row() {
        let module = TestModule::default();
        let instance = loaned_instance(3);
        let id: Uuid = instance.id().clone().into();
        let original_due = instance.due_back().clone();
        module.repository.insert(instance);

        let today = OffsetDateTime::now_utc().date();
        let error = module
            .renew_book(RenewBookDto {
                instance_id: id,
                renewal_date: today - Duration::days(1),
            })
            .await
            .unwrap_err();

        match error.current_context() {
            KernelError::Validation(message) => {
                assert_eq!(message, "Invalid date - renewal in past")
            }
            other => panic!("unexpected error: {other}"),
        }

        let stored = module.repository.get(&InstanceId::new(id)).unwrap();
        assert_eq!(stored.due_back(), &original_due);
    }

    #[tokio::test]
    async fn renew_rejects_more_than_four_weeks() {
        let module = TestModule::default();
        let instance = loaned_instance(3);
        let id: Uuid = instance.id().clone().into();
        module.repository.insert(instance);

        let today = OffsetDateTime::now_utc().date();
        let error = module
            .renew_book(RenewBookDto {
                instance_id: id,
                renewal_date: today + Duration::days(29),
            })
            .await
            .unwrap_err();

        match error.current_context() {
            KernelError::Validation(message) => {
                assert_eq!(message, "Invalid date - renewal more than 4 weeks ahead")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn renew_unknown_instance_is_not_found() {
        let module = TestModule::default();

        let today = OffsetDateTime::now_utc().date();
        let error = module
            .renew_book(RenewBookDto {
                instance_id: Uuid::new_v4(),
                renewal_date: today,
            })
            .await
            .unwrap_err();

        assert!(matches!(error.current_context(), KernelError::NotFound));
    }

    #[tokio::test]
    async fn return_clears_loan_state() {
        let module = TestModule::default();
        let instance = loaned_instance(3);
        let id: Uuid = instance.id().clone().into();
        module.repository.insert(instance);

        let returned = module
            .return_book(ReturnBookDto { instance_id: id })
            .await
            .unwrap();

        assert_eq!(returned.status, LoanStatus::Available);
        assert_eq!(returned.due_back, None);
        assert_eq!(returned.borrower, None);
    }

    #[tokio::test]
    async fn proposal_offers_three_weeks() {
        let module = TestModule::default();
        let instance = loaned_instance(3);
        let id: Uuid = instance.id().clone().into();
        module.repository.insert(instance);

        let today = OffsetDateTime::now_utc().date();
        let proposal = module
            .get_renewal_proposal(GetInstanceDto { id })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(proposal.proposed_renewal_date, today + Duration::days(21));
    }
}
