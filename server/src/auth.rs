use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use uuid::Uuid;

use application::service::GetUserService;
use application::transfer::{GetUserDto, UserDto};
use kernel::prelude::entity::UserRole;
use kernel::KernelError;

use crate::error::ErrorStatus;
use crate::handler::AppModule;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Any known user, identified by the `x-user-id` header.
pub struct AuthenticatedUser(pub UserDto);

/// A user whose role allows catalog maintenance and loan handling.
pub struct Librarian(pub UserDto);

async fn resolve_user(parts: &Parts, module: &AppModule) -> Result<UserDto, ErrorStatus> {
    let id = parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or(KernelError::Unauthorized)?;
    module
        .pgpool()
        .get_user(GetUserDto { id })
        .await
        .map_err(ErrorStatus::from)?
        .ok_or_else(|| ErrorStatus::from(KernelError::Unauthorized))
}

#[axum::async_trait]
impl FromRequestParts<AppModule> for AuthenticatedUser {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        Ok(AuthenticatedUser(resolve_user(parts, state).await?))
    }
}

#[axum::async_trait]
impl FromRequestParts<AppModule> for Librarian {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let user = resolve_user(parts, state).await?;
        match user.role {
            UserRole::Librarian => Ok(Librarian(user)),
            UserRole::Member => Err(ErrorStatus::from(KernelError::Forbidden)),
        }
    }
}

/// Visitors without a session header share one counter bucket.
pub fn visitor_key(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("anonymous")
        .to_string()
}
