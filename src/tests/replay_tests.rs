//! Replaying newline-delimited events.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::io::BufReader;

    use crate::{
        ledger::LedgerEvent,
        replay::{replay, ReplayError, ReplaySummary},
        store::{EntityStore, MemoryStore},
        tests::fixtures::*,
    };

    fn input() -> String {
        let payment = LedgerEvent::Payment(payment("op-1", &g_address(1), &g_address(2), 10));
        let bad_topic = json!({
            "kind": "transfer",
            "id": "evt-1",
            "ledger": { "sequence": 11 },
            "ledgerClosedAt": CLOSED_AT,
            "contractId": TOKEN_CONTRACT,
            "topic": [{ "symbol": "transfer" }, { "address": { "account": "01".repeat(32) } }],
            "value": { "i128": { "hi": 0, "lo": 1 } }
        });
        let debit = LedgerEvent::Debit(debit("eff-1", &g_address(1), 12));

        [
            serde_json::to_string(&payment).unwrap(),
            "{ not json".to_string(),
            String::new(),
            bad_topic.to_string(),
            serde_json::to_string(&debit).unwrap(),
        ]
        .join("\n")
    }

    #[tokio::test]
    async fn skips_failed_lines_by_default() {
        let store = MemoryStore::new();
        let text = input();

        let summary = replay(&store, BufReader::new(text.as_bytes()), false)
            .await
            .unwrap();

        assert_eq!(summary, ReplaySummary { handled: 2, failed: 2 });
        assert!(store.get_payment("op-1").await.unwrap().is_some());
        assert!(store.get_debit("eff-1").await.unwrap().is_some());
        assert_eq!(store.transfer_count().await, 0);
    }

    #[tokio::test]
    async fn halts_on_first_failure_when_asked() {
        let store = MemoryStore::new();
        let text = input();

        let err = replay(&store, BufReader::new(text.as_bytes()), true)
            .await
            .unwrap_err();

        assert!(matches!(err, ReplayError::Parse { line: 2, .. }));
        assert!(store.get_payment("op-1").await.unwrap().is_some());
        assert!(store.get_debit("eff-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reports_failing_event_id() {
        let store = MemoryStore::new();
        let text = input().lines().nth(3).unwrap().to_string();

        let err = replay(&store, BufReader::new(text.as_bytes()), true)
            .await
            .unwrap_err();

        match err {
            ReplayError::Event { line, event_id, .. } => {
                assert_eq!(line, 1);
                assert_eq!(event_id, "evt-1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn stops_on_store_failure_even_when_skipping() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let text = input();

        let err = replay(&store, BufReader::new(text.as_bytes()), false)
            .await
            .unwrap_err();

        assert!(!err.is_permanent());
        match err {
            ReplayError::Event { line, event_id, .. } => {
                assert_eq!(line, 1);
                assert_eq!(event_id, "op-1");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.get_debit("eff-1").await.unwrap().is_none());
    }
}
