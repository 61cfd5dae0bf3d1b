use tracing::{debug, info};

use super::{account_writes, bump_watermarks, persist};
use crate::error::IndexerError;
use crate::ledger::{decode_address, to_bigint, ContractEvent};
use crate::models::Transfer;
use crate::resolver::AccountResolver;
use crate::store::EntityStore;
use crate::validation::{parse_close_time, transfer_topic, validate_contract_event};

/// Indexes a token `transfer` contract event with topic `[env, from, to]`.
pub async fn handle_event_mainnet<S>(store: &S, event: &ContractEvent) -> Result<Transfer, IndexerError>
where
    S: EntityStore + ?Sized,
{
    info!(
        "Indexing transfer event {} at ledger {}",
        event.id, event.ledger.sequence
    );
    debug!("Topics: {:?}", event.topic);

    let (_env, from_val, to_val) = transfer_topic(&event.topic)?;
    validate_contract_event(event)?;
    let date = parse_close_time(&event.ledger_closed_at)?;
    let value = to_bigint(&event.value)?;

    let from = decode_address(from_val)?;
    let to = decode_address(to_val)?;
    debug!(
        "Transfer {} -> {} (contract sender: {}, contract recipient: {})",
        from,
        to,
        from.is_contract(),
        to.is_contract()
    );

    let sequence = event.ledger.sequence;
    let mut accounts = AccountResolver::new(store)
        .resolve_all(&[from.as_str(), to.as_str()], sequence)
        .await?;

    let transfer = Transfer {
        id: event.id.clone(),
        ledger: sequence,
        date,
        contract: event.contract_id.clone(),
        from_id: accounts.id(0).to_string(),
        to_id: accounts.id(1).to_string(),
        value,
    };

    bump_watermarks(&mut accounts, &event.id, sequence);

    let mut writes = account_writes(store, &accounts);
    writes.push(store.save_transfer(&transfer));
    persist(&event.id, writes).await?;

    Ok(transfer)
}
