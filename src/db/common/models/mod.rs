// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! Entity model definitions for the exchange indexer.
//!
//! Split by lifecycle: `exchange_models` holds the long-lived aggregates
//! mutated on every event, `day_bucket_models` holds the lazily created
//! per-day snapshot records.

/// Long-lived aggregates: native price, tokens, pairs, protocol totals
pub mod exchange_models;

/// Day-bucketed snapshot records keyed by parent identity and day index
pub mod day_bucket_models;

pub use day_bucket_models::{PairDayData, ProtocolDayData, TokenDayData};
pub use exchange_models::{NativePrice, Pair, ProtocolTotals, Token};
