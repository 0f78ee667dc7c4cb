mod request;
mod response;

use crate::auth::AuthenticatedUser;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::user::request::{CreateRequest, GetRequest, LoansRequest, Transformer};
use crate::route::user::response::{Presenter, UserResponse};
use application::service::{GetInstanceService, GetUserService, HandleUserService};
use application::transfer::UserDto;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use kernel::prelude::entity::UserRole;
use kernel::KernelError;
use uuid::Uuid;

pub trait UserRouter {
    fn route_user(self) -> Self;
}

// Loan listings are visible to the borrower themselves and to librarians.
fn may_view(viewer: &UserDto, subject: Uuid) -> Result<(), ErrorStatus> {
    if viewer.id == subject || matches!(viewer.role, UserRole::Librarian) {
        Ok(())
    } else {
        Err(ErrorStatus::from(KernelError::Forbidden))
    }
}

impl UserRouter for Router<AppModule> {
    fn route_user(self) -> Self {
        self.route(
            "/users",
            post(
                |State(handler): State<AppModule>, Json(req): Json<CreateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| handler.pgpool().create_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/:id",
            get(
                |State(handler): State<AppModule>,
                 AuthenticatedUser(viewer): AuthenticatedUser,
                 Path(id): Path<Uuid>| async move {
                    may_view(&viewer, id)?;
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| handler.pgpool().get_user(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(UserResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
        .route(
            "/users/:id/loans",
            get(
                |State(handler): State<AppModule>,
                 AuthenticatedUser(viewer): AuthenticatedUser,
                 Path(id): Path<Uuid>| async move {
                    may_view(&viewer, id)?;
                    Controller::new(Transformer, Presenter)
                        .intake(LoansRequest::new(id))
                        .handle(|dto| handler.pgpool().get_borrower_loans(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
