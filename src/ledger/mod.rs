pub mod address;
pub mod events;
pub mod value;

// Re-exports for convenience
pub use address::{decode_address, CanonicalAddress, DecodeError};
pub use events::{
    AccountEffect, ContractEvent, LedgerEvent, LedgerRef, PaymentOperation, ScAddress, ScVal,
};
pub use value::to_bigint;
