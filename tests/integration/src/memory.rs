//! In-memory collaborators
//!
//! Each store keeps its rows behind a `Mutex` and counts writes so tests can
//! assert what a request persisted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use stockboard_core::{
    Comment, CommentChanges, CommentRepository, DomainError, MarketDataClient, NewComment,
    NewStock, RepoResult, Stock, StockRepository, Symbol, User, UserRepository,
};

fn poisoned<T>(_: T) -> DomainError {
    DomainError::InternalError("in-memory store lock poisoned".to_string())
}

/// Comment store with sequential ids starting at 1
#[derive(Debug, Default)]
pub struct MemoryCommentRepository {
    rows: Mutex<Vec<Comment>>,
    next_id: AtomicUsize,
    creates: AtomicUsize,
}

impl MemoryCommentRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful `create` calls
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    /// Stored row, bypassing the public representation
    pub fn row(&self, id: i32) -> Option<Comment> {
        self.rows
            .lock()
            .ok()
            .and_then(|rows| rows.iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn find_all(&self) -> RepoResult<Vec<Comment>> {
        Ok(self.rows.lock().map_err(poisoned)?.clone())
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Comment>> {
        let rows = self.rows.lock().map_err(poisoned)?;
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let comment = comment.clone().into_comment(id as i32);
        self.rows.lock().map_err(poisoned)?.push(comment.clone());
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(comment)
    }

    async fn update(&self, id: i32, changes: &CommentChanges) -> RepoResult<Option<Comment>> {
        let mut rows = self.rows.lock().map_err(poisoned)?;
        Ok(rows.iter_mut().find(|c| c.id == id).map(|comment| {
            comment.apply(changes.clone());
            comment.clone()
        }))
    }

    async fn delete(&self, id: i32) -> RepoResult<Option<Comment>> {
        let mut rows = self.rows.lock().map_err(poisoned)?;
        Ok(rows
            .iter()
            .position(|c| c.id == id)
            .map(|index| rows.remove(index)))
    }
}

/// Stock store keyed by symbol
#[derive(Debug, Default)]
pub struct MemoryStockRepository {
    rows: Mutex<Vec<Stock>>,
    creates: AtomicUsize,
}

impl MemoryStockRepository {
    /// Insert a stock directly, as if it were already known locally
    pub fn seed(&self, symbol: &str, company_name: &str) -> Stock {
        let mut rows = self.rows.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let symbol = Symbol::parse(symbol).unwrap_or_else(|e| panic!("bad seed symbol: {e}"));
        let stock = NewStock::new(symbol, company_name).into_stock(rows.len() as i32 + 1);
        rows.push(stock.clone());
        stock
    }

    pub fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `create` calls (imports from market data)
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StockRepository for MemoryStockRepository {
    async fn find_by_symbol(&self, symbol: &Symbol) -> RepoResult<Option<Stock>> {
        let rows = self.rows.lock().map_err(poisoned)?;
        Ok(rows.iter().find(|s| &s.symbol == symbol).cloned())
    }

    async fn create(&self, stock: &NewStock) -> RepoResult<Stock> {
        let mut rows = self.rows.lock().map_err(poisoned)?;
        self.creates.fetch_add(1, Ordering::SeqCst);

        // Same contract as the SQL upsert: an existing symbol returns its row
        if let Some(existing) = rows.iter().find(|s| s.symbol == stock.symbol) {
            return Ok(existing.clone());
        }

        let stock = stock.clone().into_stock(rows.len() as i32 + 1);
        rows.push(stock.clone());
        Ok(stock)
    }
}

/// User store with username and email uniqueness
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    rows: Mutex<HashMap<String, (User, String)>>,
}

impl MemoryUserRepository {
    /// Remove a user, leaving any tokens issued to them valid
    pub fn remove_by_username(&self, username: &str) {
        if let Ok(mut rows) = self.rows.lock() {
            rows.retain(|_, (user, _)| user.username != username);
        }
    }

    pub fn find_id(&self, username: &str) -> Option<String> {
        self.rows.lock().ok().and_then(|rows| {
            rows.values()
                .find(|(user, _)| user.username == username)
                .map(|(user, _)| user.id.clone())
        })
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let rows = self.rows.lock().map_err(poisoned)?;
        Ok(rows.get(id).map(|(user, _)| user.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let rows = self.rows.lock().map_err(poisoned)?;
        Ok(rows
            .values()
            .find(|(user, _)| user.username == username)
            .map(|(user, _)| user.clone()))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut rows = self.rows.lock().map_err(poisoned)?;
        let taken = rows
            .values()
            .any(|(u, _)| u.username == user.username || u.email == user.email);
        if taken {
            return Err(DomainError::UserAlreadyExists);
        }
        rows.insert(user.id.clone(), (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: &str) -> RepoResult<Option<String>> {
        let rows = self.rows.lock().map_err(poisoned)?;
        Ok(rows.get(id).map(|(_, hash)| hash.clone()))
    }
}

/// Market data stand-in with a fixed catalogue
#[derive(Debug, Default)]
pub struct StubMarketData {
    listings: Mutex<HashMap<String, String>>,
    calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl StubMarketData {
    /// Make a symbol known to the provider
    pub fn list(&self, symbol: &str, company_name: &str) {
        if let Ok(mut listings) = self.listings.lock() {
            listings.insert(symbol.to_string(), company_name.to_string());
        }
    }

    /// Fail every lookup as an upstream outage
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataClient for StubMarketData {
    async fn find_by_symbol(&self, symbol: &Symbol) -> RepoResult<Option<NewStock>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::MarketDataError(
                "profile request failed: connection refused".to_string(),
            ));
        }

        let listings = self.listings.lock().map_err(poisoned)?;
        Ok(listings.get(symbol.as_str()).map(|name| {
            let mut stock = NewStock::new(symbol.clone(), name.clone());
            stock.purchase = 100.0;
            stock.industry = "Technology".to_string();
            stock
        }))
    }
}
