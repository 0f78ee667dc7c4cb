use crate::auth;
use crate::controller::{Controller, Exhaust, Intake};
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use application::service::CatalogSummaryService;
use application::transfer::{GetSummaryDto, SummaryDto};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;

pub trait IndexRouter {
    fn route_index(self) -> Self;
}

impl IndexRouter for Router<AppModule> {
    fn route_index(self) -> Self {
        self.route(
            "/",
            get(
                |State(handler): State<AppModule>, headers: HeaderMap| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(headers)
                        .handle(|dto| async move { handler.summarize(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

pub struct Transformer;

impl Intake<HeaderMap> for Transformer {
    type To = GetSummaryDto;
    fn emit(&self, input: HeaderMap) -> Self::To {
        GetSummaryDto {
            visitor_key: auth::visitor_key(&input),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    num_books: i64,
    num_instances: i64,
    num_instances_available: i64,
    num_authors: i64,
    num_visits: i64,
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<SummaryDto> for Presenter {
    type To = SummaryResponse;
    fn emit(&self, input: SummaryDto) -> Self::To {
        SummaryResponse {
            num_books: input.num_books,
            num_instances: input.num_instances,
            num_instances_available: input.num_instances_available,
            num_authors: input.num_authors,
            num_visits: input.num_visits,
        }
    }
}
