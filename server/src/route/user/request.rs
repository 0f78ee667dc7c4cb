use crate::controller::Intake;
use application::transfer::{CreateUserDto, GetBorrowerLoansDto, GetUserDto};
use kernel::prelude::entity::UserRole;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    name: String,
    role: UserRole,
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

#[derive(Debug)]
pub struct LoansRequest {
    id: Uuid,
}

impl LoansRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct Transformer;

impl Intake<CreateRequest> for Transformer {
    type To = CreateUserDto;
    fn emit(&self, input: CreateRequest) -> Self::To {
        CreateUserDto {
            name: input.name,
            role: input.role,
        }
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetUserDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetUserDto { id: input.id }
    }
}

impl Intake<LoansRequest> for Transformer {
    type To = GetBorrowerLoansDto;
    fn emit(&self, input: LoansRequest) -> Self::To {
        GetBorrowerLoansDto { borrower: input.id }
    }
}
