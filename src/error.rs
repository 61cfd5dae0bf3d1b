use thiserror::Error;

use crate::ledger::DecodeError;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Why an event could not be turned into entities.
///
/// Nothing below the replay driver retries. The driver skips decode and
/// validation failures and stops on store failures.
#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IndexerError {
    /// Malformed input fails the same way every time it is replayed.
    pub fn is_permanent(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}
