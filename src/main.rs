// Replays newline-delimited ledger events into the local entity store.
//
// Initialize logging
// Load configuration
// Open the database behind the account cache
// Replay events from EVENTS_PATH or stdin until done or Ctrl-C

use stellar_ledger_indexer::{config::Config, replay, state::AppState};

use tokio::io::{AsyncBufRead, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting stellar-ledger-indexer");

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let state = AppState::connect(config).await?;

    let reader: Box<dyn AsyncBufRead + Unpin> = match &state.config.events_path {
        Some(path) => {
            info!("Replaying events from {}", path.display());
            Box::new(BufReader::new(tokio::fs::File::open(path).await?))
        }
        None => {
            info!("Replaying events from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        }
    };

    tokio::select! {
        result = replay::replay(state.store.as_ref(), reader, state.config.halt_on_error) => {
            match result {
                Ok(summary) if summary.failed > 0 => {
                    warn!("{} events could not be indexed", summary.failed);
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Replay halted: {}", e);
                    return Err(e.into());
                }
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
