//! Service context - dependency container for services
//!
//! Holds the database pool, the collaborator trait objects and the JWT service.

use std::sync::Arc;

use stockboard_common::auth::JwtService;
use stockboard_core::traits::{
    CommentRepository, MarketDataClient, StockRepository, UserRepository,
};
use stockboard_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Collaborators are held as `Arc<dyn Trait>` so the API can run against
/// PostgreSQL and FMP in production and in-memory doubles in tests.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    // Repositories
    comment_repo: Arc<dyn CommentRepository>,
    stock_repo: Arc<dyn StockRepository>,
    user_repo: Arc<dyn UserRepository>,

    // External collaborators
    market_client: Arc<dyn MarketDataClient>,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        comment_repo: Arc<dyn CommentRepository>,
        stock_repo: Arc<dyn StockRepository>,
        user_repo: Arc<dyn UserRepository>,
        market_client: Arc<dyn MarketDataClient>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            comment_repo,
            stock_repo,
            user_repo,
            market_client,
            jwt_service,
        }
    }

    /// Start a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn stock_repo(&self) -> &dyn StockRepository {
        self.stock_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn market_client(&self) -> &dyn MarketDataClient {
        self.market_client.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    stock_repo: Option<Arc<dyn StockRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    market_client: Option<Arc<dyn MarketDataClient>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn stock_repo(mut self, repo: Arc<dyn StockRepository>) -> Self {
        self.stock_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn market_client(mut self, client: Arc<dyn MarketDataClient>) -> Self {
        self.market_client = Some(client);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` naming the first missing dependency
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext::new(
            required(self.pool, "pool")?,
            required(self.comment_repo, "comment_repo")?,
            required(self.stock_repo, "stock_repo")?,
            required(self.user_repo, "user_repo")?,
            required(self.market_client, "market_client")?,
            required(self.jwt_service, "jwt_service")?,
        ))
    }
}
