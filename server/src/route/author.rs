mod request;
mod response;

use crate::auth::Librarian;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::author::request::{
    CreateRequest, DeleteRequest, GetAllRequest, GetRequest, Transformer, UpdateRequest,
};
use crate::route::author::response::{AuthorResponse, Presenter};
use application::service::{GetAuthorService, HandleAuthorService};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/authors",
            get(
                |State(handler): State<AppModule>,
                 _librarian: Librarian,
                 Query(req): Query<GetAllRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.pgpool().get_all_authors(dto))
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
                        .handle(|dto| handler.pgpool().create_author(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/authors/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| handler.pgpool().get_author(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(AuthorResponse::into_response)
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
                        .handle(|dto| handler.pgpool().update_author(dto))
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
                        .handle(|dto| handler.pgpool().delete_author(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
