use crate::controller::Exhaust;
use application::transfer::AuthorDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
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
pub struct AuthorResponse {
    id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
            date_of_death: value.date_of_death,
        }
    }
}

impl IntoResponse for AuthorResponse {
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

impl Exhaust<Option<AuthorDto>> for Presenter {
    type To = Option<AuthorResponse>;
    fn emit(&self, input: Option<AuthorDto>) -> Self::To {
        input.map(AuthorResponse::from)
    }
}

impl Exhaust<Vec<AuthorDto>> for Presenter {
    type To = axum::Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        axum::Json::from(
            input
                .into_iter()
                .map(AuthorResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
