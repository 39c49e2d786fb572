// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Fantom Exchange Indexer
//!
//! Replays decoded pair-contract events (Transfer, Sync, Mint, Burn, Swap)
//! in canonical chain order and maintains running reserves, prices, volumes
//! and liquidity for every pair, token and the protocol as a whole.
//!
//! Produces day-bucketed snapshots for charting along the way.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use fantom_exchange_indexer::config::IndexerConfig;
use fantom_exchange_indexer::db::entity_store::{EntityStore, MemoryStore};
use fantom_exchange_indexer::pricing::StaticPriceOracle;
use fantom_exchange_indexer::processors::ExchangeProcessor;
use fantom_exchange_indexer::stream::JsonlEventStream;
use fantom_exchange_indexer::utils::bootstrap::check_or_register_genesis_state;
use tracing::info;

/// Configure jemalloc as the global allocator for better memory management
#[cfg(unix)]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

/// Command line arguments for the exchange indexer
#[derive(Parser)]
#[command(name = "fantom-exchange-indexer", version, about)]
struct IndexerArgs {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config_path: PathBuf,
}

/// Main application entry point
///
/// Initializes the async runtime with optimized settings for blockchain data
/// processing and replays the configured event log through the aggregation
/// engine.
fn main() -> Result<()> {
    // Use at least 16 threads for concurrent store operations and file I/O
    let num_cpus = num_cpus::get();
    let worker_threads = num_cpus.max(16);

    // Build Tokio runtime optimized for high-throughput processing
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder
        .disable_lifo_slot()  // Improves fairness in task scheduling
        .enable_all()         // Enable all I/O and timer drivers
        .worker_threads(worker_threads)
        .build()?
        .block_on(async {
            let args = IndexerArgs::parse();
            run(args).await
        })
}

async fn run(args: IndexerArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    info!("🚀 Starting Fantom exchange indexer");
    let config = IndexerConfig::load(&args.config_path)?;

    let store: Arc<dyn EntityStore> = Arc::new(MemoryStore::new());
    let pricing = Arc::new(StaticPriceOracle::from_config(&config.pricing));

    check_or_register_genesis_state(store.as_ref(), &config.registry).await?;

    let mut stream = JsonlEventStream::open(&config.stream.events_file).await?;
    let processor = ExchangeProcessor::new(store, pricing);
    let summary = processor.run(&mut stream).await?;

    info!(
        "✅ Indexing run finished: {} events, final position {}",
        summary.events_processed,
        summary.last_position.as_deref().unwrap_or("none")
    );
    Ok(())
}
