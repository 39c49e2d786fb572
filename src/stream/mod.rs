// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Event Stream Sources
//!
//! This module abstracts where decoded pair events come from. The engine
//! only ever asks for "the next envelope", so replay files, message queues
//! and live extractors are interchangeable behind one trait.
//!
//! ## Main Components
//!
//! ### `EventStream`
//! The pull interface the orchestrator drives. A stream yields envelopes in
//! the order the chain produced them and signals exhaustion with `None`.
//!
//! ### `jsonl_stream`
//! File-backed replay source: one JSON envelope per line, blank lines
//! skipped, malformed lines reported with their line number.

use async_trait::async_trait;

use crate::common::error::ProcessorError;
use crate::processors::events::pair_event::EventEnvelope;

/// JSONL-file replay implementation of [`EventStream`]
pub mod jsonl_stream;

pub use jsonl_stream::JsonlEventStream;

/// A pull-based source of decoded pair events in chain order.
#[async_trait]
pub trait EventStream: Send {
    /// Returns the next envelope, or `None` once the source is drained.
    async fn next_event(&mut self) -> Result<Option<EventEnvelope>, ProcessorError>;
}
