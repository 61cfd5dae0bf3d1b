use tracing::info;

use super::{account_writes, bump_watermarks, persist};
use crate::error::IndexerError;
use crate::ledger::PaymentOperation;
use crate::models::Payment;
use crate::resolver::AccountResolver;
use crate::store::EntityStore;
use crate::validation::validate_payment;

pub async fn handle_operation<S>(store: &S, op: &PaymentOperation) -> Result<Payment, IndexerError>
where
    S: EntityStore + ?Sized,
{
    info!("Indexing operation {}, type: {}", op.id, op.operation_type);
    validate_payment(op)?;

    let sequence = op.ledger.sequence;
    let mut accounts = AccountResolver::new(store)
        .resolve_all(&[op.from.as_str(), op.to.as_str()], sequence)
        .await?;

    let payment = Payment {
        id: op.id.clone(),
        from_id: accounts.id(0).to_string(),
        to_id: accounts.id(1).to_string(),
        tx_hash: op.transaction_hash.clone(),
        amount: op.amount.clone(),
    };

    bump_watermarks(&mut accounts, &op.id, sequence);

    let mut writes = account_writes(store, &accounts);
    writes.push(store.save_payment(&payment));
    persist(&op.id, writes).await?;

    Ok(payment)
}
