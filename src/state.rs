use std::sync::Arc;

use tracing::info;

use crate::cache::init_cache;
use crate::config::Config;
use crate::db::connection::establish_connection;
use crate::store::{CachedStore, EntityStore, SqliteStore};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn EntityStore>,
}

impl AppState {
    /// Opens the configured database behind the account cache.
    pub async fn connect(config: Config) -> Result<Self, sqlx::Error> {
        let pool = establish_connection(&config.database_url).await?;
        info!("Database connection established: {}", config.database_url);

        let cache = init_cache(&config);
        info!(
            "Account cache initialized with TTL: {:?} and capacity: {}",
            config.cache_ttl, config.cache_max_capacity
        );

        let store = CachedStore::new(SqliteStore::new(pool), cache);

        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }
}
