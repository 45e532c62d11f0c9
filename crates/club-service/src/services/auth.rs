//! Authentication service
//!
//! Handles registration and login. Tokens are stateless; there is no
//! logout or refresh surface.

use club_common::auth::{hash_password, verify_password};
use club_common::AppError;
use club_core::Role;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// Assigns the USER role and creates the participation status row
    /// alongside the account.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Check for duplicates before hashing; the unique constraints
        // remain the authority under concurrent registration
        let taken = self
            .ctx
            .user_repo()
            .identity_exists(&request.name, &request.email, request.dni.as_deref())
            .await?;
        if taken {
            return Err(ServiceError::conflict("User already exists"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .create(
                &request.name,
                &request.email,
                request.phone.as_deref(),
                request.dni.as_deref(),
                &password_hash,
            )
            .await?;

        self.ctx.role_repo().assign(user.id, Role::User).await?;
        self.ctx.status_repo().create_default(user.id).await?;

        info!(user_id = user.id, "User registered successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id, &user.name, &user.email)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse {
            token,
            user: UserResponse::from(&user),
        })
    }

    /// Login with name and password
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_name(&request.name)
            .await?
            .ok_or_else(|| {
                warn!(name = %request.name, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "User logged in successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id, &user.name, &user.email)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse {
            token,
            user: UserResponse::from(&user),
        })
    }
}
