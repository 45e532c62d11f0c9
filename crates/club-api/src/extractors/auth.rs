//! Session resolver - the authenticated identity behind a bearer token
//!
//! Verifies the token, loads the user row, and recomputes the effective
//! role from storage on every request. The token is never trusted for the
//! role: a role change must take effect on the next request, not at the
//! next login. This extractor establishes identity only; authorization
//! decisions live in the service layer.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use club_common::AppError;
use club_core::Role;
use club_service::Actor;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user attached to the request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl CurrentUser {
    /// The caller as the service layer sees it
    #[must_use]
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.id,
            name: self.name.clone(),
            role: self.role,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Missing or malformed Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Signature and expiry check
        let claims = app_state.jwt_service().verify(bearer.token()).map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            ApiError::App(e)
        })?;
        let user_id = claims.user_id()?;

        // The user record is the source of truth; a deleted account makes
        // an otherwise valid token worthless
        let ctx = app_state.service_context();
        let user = ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::App(AppError::UserGone))?;

        // Recompute the effective role from storage on every request
        let roles = ctx.role_repo().roles_for_user(user.id).await?;
        let role = Role::effective(roles);

        Ok(CurrentUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role,
        })
    }
}
