//! Account lookup cache implementation

use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::models::Account;

/// Keeps recently resolved accounts so that busy addresses don't hit the
/// database on every event.
#[derive(Clone)]
pub struct AccountCacheManager {
    cache: Cache<String, Account>,
}

impl AccountCacheManager {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }

    pub async fn get(&self, id: &str) -> Option<Account> {
        let hit = self.cache.get(id).await;
        if hit.is_some() {
            debug!("Account cache hit: {}", id);
        }
        hit
    }

    pub async fn put(&self, account: &Account) {
        self.cache.insert(account.id.clone(), account.clone()).await;
    }

    pub async fn invalidate(&self, id: &str) {
        self.cache.invalidate(id).await;
        debug!("Invalidated cached account: {}", id);
    }
}
