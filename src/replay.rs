//! Feeds newline-delimited JSON events through the handlers, in order.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info};

use crate::error::IndexerError;
use crate::handlers::handle_event;
use crate::ledger::LedgerEvent;
use crate::store::EntityStore;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Failed to read events: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line} is not a ledger event: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Event {event_id} on line {line} failed: {source}")]
    Event {
        line: usize,
        event_id: String,
        source: IndexerError,
    },
}

impl ReplayError {
    /// Whether feeding the same line again would fail the same way.
    pub fn is_permanent(&self) -> bool {
        match self {
            Self::Io(_) => false,
            Self::Parse { .. } => true,
            Self::Event { source, .. } => source.is_permanent(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub handled: usize,
    pub failed: usize,
}

/// Replays every event from `reader`. Malformed lines are logged and skipped
/// unless `halt_on_error` is set. A store failure always stops the replay, so
/// the event can be fed again once the store is back.
pub async fn replay<R, S>(store: &S, reader: R, halt_on_error: bool) -> Result<ReplaySummary, ReplayError>
where
    R: AsyncBufRead + Unpin,
    S: EntityStore + ?Sized,
{
    let mut lines = reader.lines();
    let mut summary = ReplaySummary::default();
    let mut line_no = 0;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let failure = match serde_json::from_str::<LedgerEvent>(&line) {
            Ok(event) => match handle_event(store, &event).await {
                Ok(record) => {
                    debug!(
                        "Stored {} {} from ledger {}",
                        event.kind(),
                        record.id(),
                        event.ledger_sequence()
                    );
                    summary.handled += 1;
                    continue;
                }
                Err(source) => ReplayError::Event {
                    line: line_no,
                    event_id: event.id().to_string(),
                    source,
                },
            },
            Err(source) => ReplayError::Parse { line: line_no, source },
        };

        if halt_on_error || !failure.is_permanent() {
            return Err(failure);
        }
        error!("{}", failure);
        summary.failed += 1;
    }

    info!(
        "Replay finished: {} events handled, {} failed",
        summary.handled, summary.failed
    );
    Ok(summary)
}
