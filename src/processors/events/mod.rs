// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

/// Shared addresses and unit constants for the event handlers
pub mod constants;

/// Day-bucket identity, get-or-create and snapshot refresh
pub mod day_buckets;

/// Decoded pair events and their stream envelope
pub mod pair_event;

/// Per-event handlers that keep the aggregate state current
pub mod pair_processor;

pub use day_buckets::DayBucketManager;
pub use pair_event::{EventEnvelope, EventKind, PairEvent};
pub use pair_processor::PairProcessor;
