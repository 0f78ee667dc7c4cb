use crate::controller::Intake;
use application::transfer::{
    CreateAuthorDto, DeleteAuthorDto, GetAllAuthorDto, GetAuthorDto, UpdateAuthorDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    first_name: String,
    last_name: String,
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
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

#[derive(Debug)]
pub struct GetRequest {
    id: Uuid,
}

impl GetRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct Transformer;

impl Intake<CreateRequest> for Transformer {
    type To = CreateAuthorDto;
    fn emit(&self, input: CreateRequest) -> Self::To {
        CreateAuthorDto {
            first_name: input.first_name,
            last_name: input.last_name,
            date_of_birth: input.date_of_birth,
            date_of_death: input.date_of_death,
        }
    }
}

impl Intake<(Uuid, UpdateRequest)> for Transformer {
    type To = UpdateAuthorDto;
    fn emit(&self, (id, req): (Uuid, UpdateRequest)) -> Self::To {
        UpdateAuthorDto {
            id,
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            date_of_death: req.date_of_death,
        }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteAuthorDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteAuthorDto { id: input.id }
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetAuthorDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetAuthorDto { id: input.id }
    }
}

impl Intake<GetAllRequest> for Transformer {
    type To = GetAllAuthorDto;
    fn emit(&self, input: GetAllRequest) -> Self::To {
        GetAllAuthorDto {
            limit: input.limit,
            offset: input.offset,
        }
    }
}
