use crate::controller::Intake;
use application::transfer::{
    CreateInstanceDto, DeleteInstanceDto, GetAllInstanceDto, GetInstanceDto, GetLoanedInstanceDto,
    RenewBookDto, ReturnBookDto, UpdateInstanceDto,
};
use kernel::prelude::entity::{LoanStatus, SelectLimit, SelectOffset};
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    book_id: Uuid,
    imprint: String,
    status: LoanStatus,
    due_back: Option<Date>,
    borrower: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    imprint: Option<String>,
    status: Option<LoanStatus>,
}

#[derive(Debug)]
pub struct DeleteRequest {
    id: Uuid,
}

impl DeleteRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

#[derive(Debug, Deserialize)]
pub struct GetLoanedRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

#[derive(Debug)]
pub struct GetRequest {
    id: Uuid,
}

impl GetRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Body of a renew call; the catalog proposes a date but accepts any
/// within the allowed window.
#[derive(Debug, Deserialize)]
pub struct RenewRequest {
    renewal_date: Date,
}

#[derive(Debug)]
pub struct ReturnRequest {
    id: Uuid,
}

impl ReturnRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct Transformer;

impl Intake<CreateRequest> for Transformer {
    type To = CreateInstanceDto;
    fn emit(&self, input: CreateRequest) -> Self::To {
        CreateInstanceDto {
            book_id: input.book_id,
            imprint: input.imprint,
            status: input.status,
            due_back: input.due_back,
            borrower: input.borrower,
        }
    }
}

impl Intake<(Uuid, UpdateRequest)> for Transformer {
    type To = UpdateInstanceDto;
    fn emit(&self, (id, req): (Uuid, UpdateRequest)) -> Self::To {
        UpdateInstanceDto {
            id,
            imprint: req.imprint,
            status: req.status,
        }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteInstanceDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteInstanceDto { id: input.id }
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetInstanceDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetInstanceDto { id: input.id }
    }
}

impl Intake<GetAllRequest> for Transformer {
    type To = GetAllInstanceDto;
    fn emit(&self, input: GetAllRequest) -> Self::To {
        GetAllInstanceDto {
            limit: input.limit,
            offset: input.offset,
        }
    }
}

impl Intake<GetLoanedRequest> for Transformer {
    type To = GetLoanedInstanceDto;
    fn emit(&self, input: GetLoanedRequest) -> Self::To {
        GetLoanedInstanceDto {
            limit: input.limit,
            offset: input.offset,
        }
    }
}

impl Intake<(Uuid, RenewRequest)> for Transformer {
    type To = RenewBookDto;
    fn emit(&self, (id, req): (Uuid, RenewRequest)) -> Self::To {
        RenewBookDto {
            instance_id: id,
            renewal_date: req.renewal_date,
        }
    }
}

impl Intake<ReturnRequest> for Transformer {
    type To = ReturnBookDto;
    fn emit(&self, input: ReturnRequest) -> Self::To {
        ReturnBookDto {
            instance_id: input.id,
        }
    }
}
