use tracing::info;

use super::{account_writes, bump_watermarks, persist};
use crate::error::IndexerError;
use crate::ledger::AccountEffect;
use crate::models::{Credit, Debit};
use crate::resolver::{AccountResolver, ResolvedAccounts};
use crate::store::EntityStore;
use crate::validation::validate_effect;

pub async fn handle_credit<S>(store: &S, effect: &AccountEffect) -> Result<Credit, IndexerError>
where
    S: EntityStore + ?Sized,
{
    let mut accounts = resolve_effect_account(store, effect).await?;

    let credit = Credit {
        id: effect.id.clone(),
        account_id: accounts.id(0).to_string(),
        amount: effect.amount.clone(),
    };

    bump_watermarks(&mut accounts, &effect.id, effect.ledger.sequence);

    let mut writes = account_writes(store, &accounts);
    writes.push(store.save_credit(&credit));
    persist(&effect.id, writes).await?;

    Ok(credit)
}

pub async fn handle_debit<S>(store: &S, effect: &AccountEffect) -> Result<Debit, IndexerError>
where
    S: EntityStore + ?Sized,
{
    let mut accounts = resolve_effect_account(store, effect).await?;

    let debit = Debit {
        id: effect.id.clone(),
        account_id: accounts.id(0).to_string(),
        amount: effect.amount.clone(),
    };

    bump_watermarks(&mut accounts, &effect.id, effect.ledger.sequence);

    let mut writes = account_writes(store, &accounts);
    writes.push(store.save_debit(&debit));
    persist(&effect.id, writes).await?;

    Ok(debit)
}

async fn resolve_effect_account<S>(
    store: &S,
    effect: &AccountEffect,
) -> Result<ResolvedAccounts, IndexerError>
where
    S: EntityStore + ?Sized,
{
    info!("Indexing effect {}, type: {}", effect.id, effect.effect_type);
    validate_effect(effect)?;

    AccountResolver::new(store)
        .resolve_all(&[effect.account.as_str()], effect.ledger.sequence)
        .await
}
