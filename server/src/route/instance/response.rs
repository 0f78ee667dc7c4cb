use crate::controller::Exhaust;
use application::transfer::{InstanceDto, RenewalProposalDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::LoanStatus;
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
pub struct InstanceResponse {
    id: Uuid,
    book_id: Uuid,
    imprint: String,
    status: LoanStatus,
    due_back: Option<Date>,
    borrower: Option<Uuid>,
}

impl From<InstanceDto> for InstanceResponse {
    fn from(value: InstanceDto) -> Self {
        Self {
            id: value.id,
            book_id: value.book_id,
            imprint: value.imprint,
            status: value.status,
            due_back: value.due_back,
            borrower: value.borrower,
        }
    }
}

impl IntoResponse for InstanceResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

/// What a renewal form needs: the copy and a date to pre-fill.
#[derive(Debug, Serialize)]
pub struct RenewalProposalResponse {
    instance: InstanceResponse,
    proposed_renewal_date: Date,
}

impl From<RenewalProposalDto> for RenewalProposalResponse {
    fn from(value: RenewalProposalDto) -> Self {
        Self {
            instance: InstanceResponse::from(value.instance),
            proposed_renewal_date: value.proposed_renewal_date,
        }
    }
}

impl IntoResponse for RenewalProposalResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<Uuid> for Presenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse { id: input }
    }
}

impl Exhaust<InstanceDto> for Presenter {
    type To = InstanceResponse;
    fn emit(&self, input: InstanceDto) -> Self::To {
        InstanceResponse::from(input)
    }
}

impl Exhaust<Option<InstanceDto>> for Presenter {
    type To = Option<InstanceResponse>;
    fn emit(&self, input: Option<InstanceDto>) -> Self::To {
        input.map(InstanceResponse::from)
    }
}

impl Exhaust<Vec<InstanceDto>> for Presenter {
    type To = axum::Json<Vec<InstanceResponse>>;
    fn emit(&self, input: Vec<InstanceDto>) -> Self::To {
        axum::Json::from(
            input
                .into_iter()
                .map(InstanceResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}

impl Exhaust<Option<RenewalProposalDto>> for Presenter {
    type To = Option<RenewalProposalResponse>;
    fn emit(&self, input: Option<RenewalProposalDto>) -> Self::To {
        input.map(RenewalProposalResponse::from)
    }
}

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
