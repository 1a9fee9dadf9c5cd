//! Account service
//!
//! Registration, login and token refresh. Issued access tokens carry the
//! username the comment service resolves authors by.

use stockboard_common::auth::{hash_password, validate_password_strength, PasswordService};
use stockboard_common::AppError;
use stockboard_core::entities::User;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account and sign it in
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        if self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("Username already taken"));
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(Uuid::new_v4().to_string(), request.username, request.email);

        // Email collisions surface here as UserAlreadyExists
        self.ctx.user_repo().create(&user, &password_hash).await?;
        info!(user_id = %user.id, "Account registered");

        self.issue_tokens(&user)
    }

    /// Authenticate with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let Some(user) = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
        else {
            warn!("Login failed: unknown username");
            return Err(AppError::InvalidCredentials.into());
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(&user.id).await? else {
            warn!(user_id = %user.id, "Login failed: no password hash");
            return Err(AppError::InvalidCredentials.into());
        };

        PasswordService::new()
            .verify_or_error(&request.password, &password_hash)
            .inspect_err(|_| warn!(user_id = %user.id, "Login failed: invalid password"))?;

        info!(user_id = %user.id, "Logged in");
        self.issue_tokens(&user)
    }

    /// Exchange a refresh token for a new pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(claims.user_id())
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        self.issue_tokens(&user)
    }

    fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let tokens = self
            .ctx
            .jwt_service()
            .generate_token_pair(&user.id, &user.username)?;
        Ok(AuthResponse::new(user, tokens))
    }
}
