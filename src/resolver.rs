//! Fetch-or-create resolution of accounts.

use tracing::debug;

use crate::error::IndexerError;
use crate::models::Account;
use crate::store::EntityStore;
use crate::validation::validate_required;

/// Accounts are keyed by the lowercase form of their address.
pub fn canonical_id(raw_id: &str) -> String {
    raw_id.to_lowercase()
}

pub struct AccountResolver<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: EntityStore + ?Sized> AccountResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Returns the stored account, or a new unsaved one first seen at
    /// `ledger_sequence`. A stored account comes back unchanged: bumping its
    /// watermark is up to the caller.
    pub async fn resolve(&self, raw_id: &str, ledger_sequence: u32) -> Result<Account, IndexerError> {
        validate_required("account", raw_id)?;
        let id = canonical_id(raw_id);

        match self.store.get_account(&id).await? {
            Some(account) => Ok(account),
            None => {
                debug!("First sighting of account {} at ledger {}", id, ledger_sequence);
                Ok(Account::new(id, ledger_sequence))
            }
        }
    }

    /// Resolves several references of one event. References that normalize
    /// to the same id share a single account.
    pub async fn resolve_all(
        &self,
        raw_ids: &[&str],
        ledger_sequence: u32,
    ) -> Result<ResolvedAccounts, IndexerError> {
        let mut resolved = ResolvedAccounts::default();

        for raw_id in raw_ids {
            let id = canonical_id(raw_id);
            if !resolved.contains(&id) {
                let account = self.resolve(raw_id, ledger_sequence).await?;
                resolved.accounts.push(account);
            }
            resolved.ids.push(id);
        }

        Ok(resolved)
    }
}

/// Distinct accounts touched by one event, plus the id each reference maps to.
#[derive(Debug, Default)]
pub struct ResolvedAccounts {
    accounts: Vec<Account>,
    ids: Vec<String>,
}

impl ResolvedAccounts {
    /// Canonical id of the `index`-th reference passed to `resolve_all`.
    pub fn id(&self, index: usize) -> &str {
        &self.ids[index]
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn contains(&self, id: &str) -> bool {
        self.accounts.iter().any(|account| account.id == id)
    }

    /// Bumps every watermark to `ledger_sequence`; returns the ids whose
    /// stored watermark was already ahead.
    pub fn observe(&mut self, ledger_sequence: u32) -> Vec<String> {
        self.accounts
            .iter_mut()
            .filter_map(|account| {
                (!account.observe(ledger_sequence)).then(|| account.id.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::validation::ValidationError;

    #[tokio::test]
    async fn new_account_is_stamped_but_not_saved() {
        let store = MemoryStore::new();
        let account = AccountResolver::new(&store).resolve("GABC", 100).await.unwrap();

        assert_eq!(account, Account::new("gabc".to_string(), 100));
        assert_eq!(store.account_count().await, 0);
    }

    #[tokio::test]
    async fn existing_account_comes_back_unchanged() {
        let store = MemoryStore::new();
        store.save_account(&Account::new("gabc".to_string(), 100)).await.unwrap();

        let account = AccountResolver::new(&store).resolve("GaBc", 130).await.unwrap();
        assert_eq!(account.first_seen_ledger, 100);
        assert_eq!(account.last_seen_ledger, 100);
    }

    #[tokio::test]
    async fn duplicate_references_share_one_account() {
        let store = MemoryStore::new();
        let resolved = AccountResolver::new(&store)
            .resolve_all(&["GSELF", "gself"], 7)
            .await
            .unwrap();

        assert_eq!(resolved.accounts().len(), 1);
        assert_eq!(resolved.id(0), "gself");
        assert_eq!(resolved.id(1), "gself");
    }

    #[tokio::test]
    async fn blank_id_is_rejected() {
        let store = MemoryStore::new();
        let err = AccountResolver::new(&store).resolve(" ", 1).await.unwrap_err();
        assert!(matches!(
            err,
            IndexerError::Validation(ValidationError::MissingField("account"))
        ));
    }

    #[test]
    fn observe_reports_accounts_ahead_of_the_event() {
        let mut resolved = ResolvedAccounts {
            accounts: vec![
                Account { id: "a".to_string(), first_seen_ledger: 1, last_seen_ledger: 50 },
                Account::new("b".to_string(), 10),
            ],
            ids: vec!["a".to_string(), "b".to_string()],
        };

        assert_eq!(resolved.observe(20), vec!["a".to_string()]);
        assert_eq!(resolved.accounts()[0].last_seen_ledger, 50);
        assert_eq!(resolved.accounts()[1].last_seen_ledger, 20);
    }
}
