use std::sync::Arc;

use ahash::AHashMap;
use tracing::info;

use crate::common::error::ProcessorError;
use crate::db::entity_store::EntityStore;
use crate::pricing::PricingOracle;
use crate::processors::events::pair_event::{EventKind, EVENT_KINDS};
use crate::processors::events::pair_processor::PairProcessor;
use crate::stream::EventStream;

/// How many events pass between progress log lines.
const PROGRESS_LOG_INTERVAL: u64 = 10_000;

/// What one replay run accomplished.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub events_processed: u64,
    pub per_kind: AHashMap<EventKind, u64>,
    pub last_position: Option<String>,
}

impl RunSummary {
    pub fn count(&self, kind: EventKind) -> u64 {
        self.per_kind.get(&kind).copied().unwrap_or(0)
    }
}

/// Drains an event stream through the pair handlers, one event at a time.
///
/// The single-writer discipline lives here: events apply strictly in
/// `(block, transaction, log)` order, and the first failure halts the run
/// with nothing advanced past it.
pub struct ExchangeProcessor {
    pair_processor: PairProcessor,
}

impl ExchangeProcessor {
    pub fn new(store: Arc<dyn EntityStore>, pricing: Arc<dyn PricingOracle>) -> Self {
        info!("🚀 Creating ExchangeProcessor with incremental aggregation");
        ExchangeProcessor {
            pair_processor: PairProcessor::new(store, pricing),
        }
    }

    pub async fn run(
        &self,
        stream: &mut dyn EventStream,
    ) -> Result<RunSummary, ProcessorError> {
        let mut summary = RunSummary::default();
        let mut last: Option<((u64, u32, u32), String)> = None;

        while let Some(envelope) = stream.next_event().await? {
            let key = envelope.key();
            if let Some((previous_key, previous_position)) = &last {
                if key <= *previous_key {
                    return Err(ProcessorError::OutOfOrder {
                        previous: previous_position.clone(),
                        offending: envelope.position(),
                    });
                }
            }

            self.pair_processor.handle_event(&envelope).await?;

            *summary.per_kind.entry(envelope.event.kind()).or_insert(0) += 1;
            summary.events_processed += 1;
            last = Some((key, envelope.position()));

            if summary.events_processed % PROGRESS_LOG_INTERVAL == 0 {
                info!(
                    "📊 Processed {} events, now at {}",
                    summary.events_processed,
                    envelope.position()
                );
            }
        }

        summary.last_position = last.map(|(_, position)| position);
        info!(
            "✅ Replay complete: {} events processed",
            summary.events_processed
        );
        for kind in EVENT_KINDS {
            let count = summary.count(kind);
            if count > 0 {
                info!("📊 {}: {} events", kind, count);
            }
        }
        Ok(summary)
    }
}
