use dotenvy::dotenv;
use pocket_ledger::{
    Filter, Ledger, LoadOutcome, PersistenceBridge, Result, config,
    core::format_currency,
    persistence,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Open the configured blob store
    let blob_store = persistence::open_blob_store(&app_config.storage)
        .await
        .inspect_err(|e| error!("Failed to open blob store: {}", e))?;

    // 5. Load the ledger; an unreadable snapshot falls back to an empty ledger
    let bridge = PersistenceBridge::new(blob_store, app_config.storage.key.clone());
    let (ledger, outcome) = Ledger::open(bridge).await;
    match outcome {
        LoadOutcome::Missing => info!("Starting with an empty ledger"),
        LoadOutcome::Restored {
            count,
            duplicates_dropped,
            invalid_dropped,
        } => info!(
            "Restored {} transaction(s), {} duplicate(s) and {} invalid record(s) dropped",
            count, duplicates_dropped, invalid_dropped
        ),
        LoadOutcome::Recovered { error } => {
            warn!("Saved ledger was unreadable ({}); starting empty", error);
        }
    }

    // 6. Report the current totals
    let summary = ledger.summary();
    info!(
        "Income {} | Expense {} | Balance {} ({:?})",
        format_currency(summary.income),
        format_currency(summary.expense),
        format_currency(summary.balance),
        summary.tone()
    );
    for filter in [Filter::Income, Filter::Expense] {
        info!(
            "{} entries: {}",
            filter,
            ledger.store().list(filter).count()
        );
    }

    Ok(())
}
