//! Operator Dashboard RS
//!
//! Command-line shell around the query builder: restores the last run
//! and any saved query definition, executes the composed query against
//! the configured query service, renders a page of rows, and writes
//! the spreadsheet export when asked.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use opd_client::{QueryClient, QueryRunner, TracingNotifier};
use opd_core::config::AppConfig;
use opd_export::{export_rows, paginate};
use opd_queries::state::QueryState;
use opd_storage::{KeyValueStore, LocalStore, PersistenceBridge};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        warn!("Failed to load config from env: {}, using defaults", e);
        AppConfig::default()
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        endpoint = %config.query_service.base_url,
        "Starting Operator Dashboard RS"
    );

    let store: Arc<dyn KeyValueStore> = Arc::new(LocalStore::new(&config.storage.local_path));
    let bridge = PersistenceBridge::new(store);
    let client = QueryClient::new(&config.query_service)?;
    let runner = QueryRunner::new(client, bridge, Arc::new(TracingNotifier));

    let mut state = QueryState::new();

    if runner.load_query(&mut state).await {
        info!("Loaded saved query definition");
    }

    if runner.hydrate(&mut state).await {
        info!(rows = state.rows.len(), "Restored last run from cache");
        render_page(&state, config.export.page_size)?;
    }

    if runner.execute(&mut state).await.is_ok() {
        render_page(&state, config.export.page_size)?;

        if std::env::args().any(|arg| arg == "--export") {
            write_export(&state)?;
        }

        runner.save_query(&state).await?;
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,opd_cli=debug,opd_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Print the query text and the current page of rows
fn render_page(state: &QueryState, page_size: usize) -> anyhow::Result<()> {
    if !state.query_text.is_empty() {
        println!("{}", state.query_text);
    }

    let page = paginate(&state.rows, state.current_page, page_size);
    for row in page.rows {
        println!("{}", serde_json::to_string(row)?);
    }

    if page.total_pages > 1 {
        println!("-- page {} of {}", page.number, page.total_pages);
    }

    Ok(())
}

/// Write the spreadsheet artifact next to the current directory
fn write_export(state: &QueryState) -> anyhow::Result<()> {
    match export_rows(&state.rows)? {
        Some(artifact) => {
            std::fs::write(artifact.filename, &artifact.bytes)?;
            info!(
                file = artifact.filename,
                size = artifact.bytes.len(),
                "Export written"
            );
        }
        None => info!("No rows to export"),
    }

    Ok(())
}
