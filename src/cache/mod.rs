pub mod account;

pub use account::AccountCacheManager;

use crate::config::Config;

pub fn init_cache(config: &Config) -> AccountCacheManager {
    AccountCacheManager::new(config.cache_max_capacity, config.cache_ttl)
}
