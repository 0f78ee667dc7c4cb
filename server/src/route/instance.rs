mod request;
mod response;

use crate::auth::Librarian;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::instance::request::{
    CreateRequest, DeleteRequest, GetAllRequest, GetLoanedRequest, GetRequest, RenewRequest,
    ReturnRequest, Transformer, UpdateRequest,
};
use crate::route::instance::response::{InstanceResponse, Presenter, RenewalProposalResponse};
use application::service::{GetInstanceService, HandleInstanceService, RenewBookService};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

pub trait InstanceRouter {
    fn route_instance(self) -> Self;
}

impl InstanceRouter for Router<AppModule> {
    fn route_instance(self) -> Self {
        self.route(
            "/instances",
            get(
                |State(handler): State<AppModule>,
                 _librarian: Librarian,
                 Query(req): Query<GetAllRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.pgpool().get_all_instances(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 _librarian: Librarian,
                 Json(req): Json<CreateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.pgpool().create_instance(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/instances/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| handler.pgpool().get_instance(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(InstanceResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(handler): State<AppModule>,
                 _librarian: Librarian,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((id, req))
                        .handle(|dto| handler.pgpool().update_instance(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>,
                 _librarian: Librarian,
                 Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteRequest::new(id))
                        .handle(|dto| handler.pgpool().delete_instance(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/loans",
            get(
                |State(handler): State<AppModule>,
                 _librarian: Librarian,
                 Query(req): Query<GetLoanedRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.pgpool().get_loaned_instances(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/instances/:id/renew",
            get(
                |State(handler): State<AppModule>,
                 _librarian: Librarian,
                 Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| handler.pgpool().get_renewal_proposal(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(RenewalProposalResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 _librarian: Librarian,
                 Path(id): Path<Uuid>,
                 Json(req): Json<RenewRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((id, req))
                        .handle(|dto| handler.pgpool().renew_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/instances/:id/return",
            post(
                |State(handler): State<AppModule>,
                 _librarian: Librarian,
                 Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(ReturnRequest::new(id))
                        .handle(|dto| handler.pgpool().return_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
