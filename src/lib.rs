pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod replay;
pub mod resolver;
pub mod state;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use error::IndexerError;
pub use handlers::{
    handle_credit, handle_debit, handle_event, handle_event_mainnet, handle_operation,
    IndexedRecord,
};
pub use ledger::{decode_address, CanonicalAddress, LedgerEvent};
pub use models::{Account, Credit, Debit, Payment, Transfer};
pub use resolver::AccountResolver;
pub use store::{EntityStore, StoreError};
pub use validation::ValidationError;
