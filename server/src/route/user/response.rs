use crate::controller::Exhaust;
use application::transfer::{InstanceDto, UserDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{LoanStatus, UserRole};
use serde::Serialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    id: Uuid,
}

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: Uuid,
    name: String,
    role: UserRole,
}

impl From<UserDto> for UserResponse {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            role: value.role,
        }
    }
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct LoanResponse {
    id: Uuid,
    book_id: Uuid,
    imprint: String,
    status: LoanStatus,
    due_back: Option<Date>,
}

impl From<InstanceDto> for LoanResponse {
    fn from(value: InstanceDto) -> Self {
        Self {
            id: value.id,
            book_id: value.book_id,
            imprint: value.imprint,
            status: value.status,
            due_back: value.due_back,
        }
    }
}

pub struct Presenter;

impl Exhaust<Uuid> for Presenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse { id: input }
    }
}

impl Exhaust<Option<UserDto>> for Presenter {
    type To = Option<UserResponse>;
    fn emit(&self, input: Option<UserDto>) -> Self::To {
        input.map(UserResponse::from)
    }
}

impl Exhaust<Vec<InstanceDto>> for Presenter {
    type To = axum::Json<Vec<LoanResponse>>;
    fn emit(&self, input: Vec<InstanceDto>) -> Self::To {
        axum::Json::from(input.into_iter().map(LoanResponse::from).collect::<Vec<_>>())
    }
}
