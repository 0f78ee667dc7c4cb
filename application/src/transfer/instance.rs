use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{
    BookInstance, DestructBookInstance, LoanStatus, SelectLimit, SelectOffset,
};

#[derive(Debug, Clone)]
pub struct InstanceDto {
    pub id: Uuid,
    pub book_id: Uuid,
    pub imprint: String,
    pub status: LoanStatus,
    pub due_back: Option<Date>,
    pub borrower: Option<Uuid>,
}

impl From<BookInstance> for InstanceDto {
    fn from(value: BookInstance) -> Self {
        let DestructBookInstance {
            id,
            book_id,
            imprint,
            status,
            due_back,
            borrower,
        } = value.into_destruct();
        Self {
            id: id.into(),
            book_id: book_id.into(),
            imprint: imprint.into(),
            status,
            due_back: due_back.map(Into::into),
            borrower: borrower.map(Into::into),
        }
    }
}

pub struct GetInstanceDto {
    pub id: Uuid,
}

pub struct GetAllInstanceDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct GetLoanedInstanceDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct GetBorrowerLoansDto {
    pub borrower: Uuid,
}

pub struct CreateInstanceDto {
    pub book_id: Uuid,
    pub imprint: String,
    pub status: LoanStatus,
    pub due_back: Option<Date>,
    pub borrower: Option<Uuid>,
}

pub struct UpdateInstanceDto {
    pub id: Uuid,
    pub imprint: Option<String>,
    pub status: Option<LoanStatus>,
}

pub struct DeleteInstanceDto {
    pub id: Uuid,
}

pub struct RenewBookDto {
    pub instance_id: Uuid,
    pub renewal_date: Date,
}

pub struct ReturnBookDto {
    pub instance_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct RenewalProposalDto {
    pub instance: InstanceDto,
    pub proposed_renewal_date: Date,
}
